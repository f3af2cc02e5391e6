use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use tracing::{debug, error};

use site::{NavState, Section, SiteConfig, Theme};

use crate::common::dom::{self, ScrollListener};
use crate::components::navigation::NavBar;

mod about;
mod contact;
mod footer;
mod hero;
mod portfolio;
mod services;

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use portfolio::Portfolio;
use services::Services;

// nav bar buttons and the hero call-to-action buttons all go through here
pub fn go_to(mut nav_signal: Signal<NavState>, section: Section) {
    let op = nav_signal.write().navigate(section);

    if let Err(err) = dom::apply_history(op) {
        error!("failed to push history entry for {section}: {err}");
    }
    if let Err(err) = dom::scroll_to(section, true) {
        error!("failed to scroll to {section}: {err}");
    }
}

fn track_scroll(mut nav_signal: Signal<NavState>) {
    let scroll_y = match dom::scroll_y() {
        Ok(val) => val,
        Err(err) => {
            error!("failed to read scroll position: {err}");
            return;
        }
    };
    let fragment = dom::current_fragment().unwrap_or_default();

    // work on a copy so unchanged scroll events do not re-render the page
    let mut state = *nav_signal.peek();
    let op = state.on_scroll(scroll_y, &dom::section_spans(), &fragment);

    if state != *nav_signal.peek() {
        nav_signal.set(state);
    }

    if let Some(op) = op {
        if let Err(err) = dom::apply_history(op) {
            error!("failed to replace history entry: {err}");
        }
    }
}

#[component]
pub fn Landing() -> Element {
    use_context_provider(|| match SiteConfig::embedded() {
        Ok(val) => val,
        Err(err) => {
            error!("falling back to default site config: {err:#}");
            SiteConfig::default()
        }
    });

    let nav_signal = use_signal(NavState::new);
    let theme_signal = use_signal(Theme::default);

    // the listener guard lives inside this future, so it is detached whenever the future is
    // dropped, including when the page unmounts
    use_future(move || async move {
        let (tx, mut rx) = mpsc::unbounded();

        let _listener = match ScrollListener::attach(tx) {
            Ok(val) => val,
            Err(err) => {
                error!("scroll tracking disabled: {err}");
                return;
            }
        };

        while rx.next().await.is_some() {
            track_scroll(nav_signal);
        }
    });

    // deep links: runs once the sections exist in the dom
    use_effect(move || {
        let mut nav_signal = nav_signal;

        let Ok(fragment) = dom::current_fragment() else {
            return;
        };
        let Some(section) = nav_signal.write().restore(&fragment) else {
            return;
        };

        debug!("restoring {section} from url");
        if let Err(err) = dom::scroll_to(section, false) {
            error!("failed to scroll to {section}: {err}");
        }
    });

    rsx! {
        div { class: "site", "data-theme": theme_signal().as_attr(),
            NavBar { nav_signal, theme_signal }

            main {
                Hero { nav_signal }
                About {}
                Services {}
                Portfolio {}
                Contact {}
            }

            Footer {}
        }
    }
}
