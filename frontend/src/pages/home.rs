//! Home page: Drive connection widget plus navigation cards.

use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, A};

use crate::auth::use_auth;
use crate::components::DriveConnect;
use crate::types::MediaKind;

struct HomeCard {
    path: String,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    class: &'static str,
}

fn cards() -> Vec<HomeCard> {
    let media = [
        (MediaKind::Pdf, "Upload PDF File", "Process PDF documents"),
        (MediaKind::Text, "Upload Text File", "Analyze text files"),
        (MediaKind::Image, "Upload Image File", "Process image files"),
        (MediaKind::Video, "Upload Video File", "Analyze video content"),
        (MediaKind::Audio, "Upload Audio File", "Process audio files"),
    ];
    let mut cards: Vec<HomeCard> = media
        .into_iter()
        .map(|(kind, title, description)| HomeCard {
            path: kind.route(),
            icon: kind.icon(),
            title,
            description,
            class: kind.accent_class(),
        })
        .collect();
    cards.push(HomeCard {
        path: "/paste-text".to_string(),
        icon: "📋",
        title: "Paste Text",
        description: "Analyze pasted text",
        class: "accent-violet",
    });
    cards.push(HomeCard {
        path: "/youtube-link".to_string(),
        icon: "▶️",
        title: "YouTube Link",
        description: "Process YouTube videos",
        class: "accent-rose",
    });
    cards
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        navigate("/login", Default::default());
    };

    view! {
        <Title text="mediadrop"/>
        <div class="home-page">
            <div class="home-header">
                <div>
                    <h1>"Content Dashboard"</h1>
                    <p class="home-subtitle">
                        "Send documents, media, and links to your knowledge pipeline"
                    </p>
                </div>
                <button class="btn btn-secondary" on:click=on_logout>
                    "Logout"
                </button>
            </div>

            <DriveConnect/>

            <div class="home-grid">
                {cards()
                    .into_iter()
                    .map(|card| {
                        view! {
                            <A href=card.path class=format!("home-card {}", card.class)>
                                <div class="home-card-icon">{card.icon}</div>
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
