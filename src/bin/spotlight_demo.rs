//! Demo that walks a key sequence through the spotlight and prints each outcome.

use focus_spotlight::catalog::Catalog;
use focus_spotlight::effects::{DeepLinkNavigator, EffectDispatcher, LogNotifier, MemoryClipboard};
use focus_spotlight::input::{handle_key, Key, KeyOutcome};
use focus_spotlight::spotlight::Spotlight;
use focus_spotlight::view::SpotlightView;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut spotlight = Spotlight::from_catalog(&Catalog::builtin())?;
    let clipboard = MemoryClipboard::default();
    let navigator = DeepLinkNavigator::new("/explorer");
    let dispatcher = EffectDispatcher {
        clipboard: &clipboard,
        navigator: &navigator,
        notifier: &LogNotifier,
    };

    let seq = ["ArrowRight", "ArrowRight", "ArrowLeft", "ArrowLeft", "c", "Enter", "x"];

    for name in seq {
        let outcome = handle_key(&mut spotlight, Key::parse(name), &true);
        if let KeyOutcome::Effect { effect } = &outcome {
            dispatcher.dispatch(effect);
        }
        let view = SpotlightView::of(&spotlight)?;
        println!(
            "{name:>10} -> {outcome:?} | {}/{} {} {} ({})",
            view.ordinal, view.total, view.identifier, view.topic_title, view.delta_label
        );
    }

    println!(
        "clipboard={:?} last_link={:?}",
        clipboard.contents(),
        navigator.last_link()
    );
    println!("spotlight-demo done");
    Ok(())
}
