//! Root application component with routing and session wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::session::guard::RequireSession;
use crate::session::namespace::{COHUB, STUDENT};
use crate::session::state::SessionHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates one session handle per portal namespace, restores both from the
/// persisted store once the app runs in the browser, and injects the
/// handles into the route views. Protected routes render behind
/// `RequireSession`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cohub = SessionHandle::new(&COHUB);
    let student = SessionHandle::new(&STUDENT);

    // Restore persisted sessions before any guard decision is made; the
    // guard stays pending until this has run.
    Effect::new(move || {
        cohub.initialize();
        student.initialize();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tutorhub.css"/>
        <Title text="TutorHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>

                // Hub operator portal
                <Route
                    path=(StaticSegment("cohub"), StaticSegment("login"))
                    view=move || view! { <LoginPage session=cohub/> }
                />
                <Route
                    path=(StaticSegment("cohub"), StaticSegment("register"))
                    view=move || view! { <RegisterPage session=cohub/> }
                />
                <Route
                    path=(StaticSegment("cohub"), StaticSegment("forgot-password"))
                    view=move || view! { <ForgotPasswordPage session=cohub/> }
                />
                <Route
                    path=(
                        StaticSegment("cohub"),
                        StaticSegment("reset-password"),
                        ParamSegment("token"),
                    )
                    view=move || view! { <ResetPasswordPage session=cohub/> }
                />
                <Route
                    path=(StaticSegment("cohub"), StaticSegment("dashboard"))
                    view=move || {
                        view! {
                            <RequireSession session=cohub>
                                <DashboardPage session=cohub/>
                            </RequireSession>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("cohub"), StaticSegment("profile"))
                    view=move || {
                        view! {
                            <RequireSession session=cohub>
                                <ProfilePage session=cohub/>
                            </RequireSession>
                        }
                    }
                />

                // Student portal
                <Route
                    path=(StaticSegment("student"), StaticSegment("login"))
                    view=move || view! { <LoginPage session=student/> }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("register"))
                    view=move || view! { <RegisterPage session=student/> }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("forgot-password"))
                    view=move || view! { <ForgotPasswordPage session=student/> }
                />
                <Route
                    path=(
                        StaticSegment("student"),
                        StaticSegment("reset-password"),
                        ParamSegment("token"),
                    )
                    view=move || view! { <ResetPasswordPage session=student/> }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("dashboard"))
                    view=move || {
                        view! {
                            <RequireSession session=student>
                                <DashboardPage session=student/>
                            </RequireSession>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("profile"))
                    view=move || {
                        view! {
                            <RequireSession session=student>
                                <ProfilePage session=student/>
                            </RequireSession>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
