//! The podcast listing page, bound to `/`.

use leptos::{prelude::*, task::spawn_local};

use crate::{
    api::{self, Episode},
    config::RuntimeConfig,
    icon::{Icon, IconFamily},
};

static YOUTUBE_URL: &str = "https://www.youtube.com/@ImpAndSkizz";
static SPOTIFY_URL: &str = "https://open.spotify.com/show/imp-and-skizz";
static APPLE_URL: &str = "https://podcasts.apple.com/podcast/imp-and-skizz";
static PATREON_URL: &str = "https://www.patreon.com/ImpAndSkizz";

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<RuntimeConfig>();
    let episodes = RwSignal::new(Vec::<Episode>::new());
    let fetch_error = RwSignal::new(None::<String>);
    let newest_first = RwSignal::new(true);

    let endpoint = config.api_endpoint().to_string();
    spawn_local(async move {
        match api::fetch_episodes(&endpoint).await {
            Ok(list) => episodes.set(list),
            Err(err) => {
                log::warn!("episode fetch failed: {err}");
                fetch_error.set(Some("Could not load episodes right now.".to_owned()));
            }
        }
    });

    let listing = move || {
        if let Some(message) = fetch_error.get() {
            return view! { <p class="error">{message}</p> }.into_any();
        }
        let list = ordered(episodes.get(), newest_first.get());
        view! {
            <ul class="episodes__list">
                {list
                    .into_iter()
                    .map(|episode| view! { <EpisodeRow episode=episode/> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <main class="container">
            <header class="masthead">
                <h1>{crate::head::SITE_TITLE}</h1>
                <p class="tagline">"Every episode, one index."</p>
                <nav class="platforms">
                    <a href=YOUTUBE_URL title="YouTube">
                        <Icon family={IconFamily::Brands} name="youtube"/>
                    </a>
                    <a href=SPOTIFY_URL title="Spotify">
                        <Icon family={IconFamily::Brands} name="spotify"/>
                    </a>
                    <a href=APPLE_URL title="Apple Podcasts">
                        <Icon family={IconFamily::Brands} name="apple"/>
                    </a>
                    <a href=PATREON_URL title="Patreon">
                        <Icon family={IconFamily::Brands} name="patreon"/>
                    </a>
                </nav>
            </header>
            <section class="episodes">
                <button
                    class="episodes__sort"
                    on:click=move |_| newest_first.update(|value| *value = !*value)
                >
                    {move || {
                        if newest_first.get() {
                            view! { <Icon family={IconFamily::Solid} name="arrow-down"/> }
                        } else {
                            view! { <Icon family={IconFamily::Solid} name="arrow-up"/> }
                        }
                    }}
                    " Release date"
                </button>
                {listing}
            </section>
            <footer class="footer">
                <a href=PATREON_URL class="support">
                    <Icon family={IconFamily::Solid} name="mug-saucer"/>
                    " Support the show"
                </a>
            </footer>
        </main>
    }
}

#[component]
fn EpisodeRow(episode: Episode) -> impl IntoView {
    let Episode {
        title,
        description,
        episode,
        published_at,
        url,
        ..
    } = episode;
    view! {
        <li class="episode">
            <span class="episode__number">
                {episode.map(|number| format!("#{number}")).unwrap_or_default()}
            </span>
            <div class="episode__body">
                <h2>{title}</h2>
                <p class="episode__date">{published_at}</p>
                <p>{description}</p>
            </div>
            {url
                .map(|href| {
                    view! {
                        <a class="episode__link" href=href target="_blank" rel="noopener">
                            <Icon family={IconFamily::Solid} name="arrow-up-right-from-square"/>
                        </a>
                    }
                })}
        </li>
    }
}

/// Orders episodes by publication date; dates are ISO 8601 so lexicographic
/// comparison matches chronology.
fn ordered(mut list: Vec<Episode>, newest_first: bool) -> Vec<Episode> {
    list.sort_by(|a, b| {
        if newest_first {
            b.published_at.cmp(&a.published_at)
        } else {
            a.published_at.cmp(&b.published_at)
        }
    });
    list
}
