//! Public marketing landing page with portal entry points.

use leptos::prelude::*;

use crate::session::namespace::{COHUB, STUDENT};

/// Public landing page — routes visitors to the right portal sign-in.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <section class="landing-hero">
                <h1>"TutorHub"</h1>
                <p>"Find a tutoring hub near you, or run your own."</p>
            </section>

            <section class="landing-portals">
                <div class="portal-card">
                    <h2>{STUDENT.title}</h2>
                    <p>"Book sessions and follow your progress."</p>
                    <a href=STUDENT.login_path class="btn btn--primary">
                        "Student sign in"
                    </a>
                    <a href=STUDENT.register_path class="portal-card__alt">
                        "Create a student account"
                    </a>
                </div>

                <div class="portal-card">
                    <h2>{COHUB.title}</h2>
                    <p>"Manage your hub, tutors, and bookings."</p>
                    <a href=COHUB.login_path class="btn btn--primary">
                        "Operator sign in"
                    </a>
                    <a href=COHUB.register_path class="portal-card__alt">
                        "Register a hub"
                    </a>
                </div>
            </section>
        </div>
    }
}
