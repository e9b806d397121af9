//! Root application module.
//!
//! Loads the bundled preview catalog and renders the hover preview inside an
//! error boundary, following Leptos conventions.

use leptos::prelude::*;

use crate::components::HoverPreview;
use crate::core::Catalog;

/// Root application component with error boundary.
///
/// This component:
/// - Loads and validates the bundled preview catalog
/// - Wraps the page in an ErrorBoundary so catalog errors are shown instead
///   of a blank screen
/// - Renders the main HoverPreview component
#[component]
pub fn App() -> impl IntoView {
    let catalog = Catalog::bundled();
    if let Err(e) = &catalog {
        log::error!("{e}");
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #e0e0e0;
                    font-family: 'Helvetica Neue', Arial, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "The preview catalog could not be loaded."
                        </p>
                        <ul style="
                            margin: 1rem 0 0 0;
                            padding-left: 1.5rem;
                            text-align: left;
                            color: #ff6b6b;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </div>
                </div>
            }
        >
            {catalog.map(|catalog| view! { <HoverPreview catalog=catalog /> })}
        </ErrorBoundary>
    }
}
