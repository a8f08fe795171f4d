use std::cell::{Cell, RefCell};
use std::rc::Rc;

use clap::Parser;
use numkey_core::*;
use numkey_ui::*;
use web_time::{Duration, Instant};

/// Drives a keypad through a scripted session and logs what happens.
#[derive(Parser, Debug)]
#[command(name = "keypad_demo", version, about, long_about = None)]
struct Cli {
    /// Use the tablet layout
    #[arg(long)]
    pad: bool,
    /// Hide the decimal key
    #[arg(long)]
    no_decimal: bool,
    /// Locale tag for the decimal separator, e.g. de-DE
    #[arg(long)]
    locale: Option<String>,
}

fn tap(pad: &mut NumberKeypad, id: KeyId) {
    let at = pad.key_rect(id).center();
    pad.handle_pointer(&PointerEvent::touch(
        PointerEventKind::Down(PointerButton::Primary),
        at,
    ));
    pad.handle_pointer(&PointerEvent::touch(
        PointerEventKind::Up(PointerButton::Primary),
        at,
    ));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let idiom = if cli.pad {
        InterfaceIdiom::Pad
    } else {
        InterfaceIdiom::Phone
    };

    let config = KeypadConfig {
        allows_decimal_point: !cli.no_decimal,
        return_key_title: "Go".into(),
        locale: cli.locale,
        ..KeypadConfig::default()
    };
    let clock = TestClock::new(Instant::now());
    let mut pad = with_idiom(idiom, || NumberKeypad::from_config(config))?
        .with_clock(clock.clone());

    let field = Rc::new(RefCell::new(NumberFieldState::new()));
    pad.set_key_input(field.clone());
    pad.configure_dismiss_key();

    let clicks = Rc::new(Cell::new(0u32));
    let c = clicks.clone();
    pad.set_click_feedback(move || c.set(c.get() + 1));

    pad.layout_if_needed();
    log::info!(
        "keypad {:?} ({:?}, decimal {:?})",
        pad.bounds(),
        pad.interface_idiom(),
        pad.locale().decimal_separator()
    );
    for key in pad.keys().filter(|k| !k.is_hidden()) {
        log::debug!("{:?} at {:?}", key.id(), key.rect());
    }

    for d in [3, 1, 4] {
        if let Some(id) = KeyId::digit(d) {
            tap(&mut pad, id);
        }
    }
    tap(&mut pad, KeyId::DecimalPoint);
    for d in [1, 5, 9, 2, 6] {
        if let Some(id) = KeyId::digit(d) {
            tap(&mut pad, id);
        }
    }
    log::info!("typed {:?}", field.borrow().text);

    // hold backspace for 900ms, ticking at ~60Hz
    let at = pad.key_rect(KeyId::Backspace).center();
    pad.handle_pan(GesturePhase::Began, at);
    let frame = Duration::from_millis(16);
    let mut held = Duration::ZERO;
    while held < Duration::from_millis(900) && pad.is_tracking() {
        clock.advance(frame);
        held += frame;
        pad.tick();
    }
    pad.handle_pan(GesturePhase::Ended, at);
    log::info!("after holding backspace {held:?}: {:?}", field.borrow().text);

    let separator = pad.locale().decimal_separator().to_string();
    match field.borrow().value(&separator) {
        Some(v) => log::info!("value {v}"),
        None => log::warn!("{:?} is not a number", field.borrow().text),
    }

    let mut scene = Scene::default();
    pad.paint(&mut scene);
    let (rects, texts, images) = scene.nodes.iter().fold((0, 0, 0), |(r, t, i), n| match n {
        SceneNode::Rect { .. } => (r + 1, t, i),
        SceneNode::Text { .. } => (r, t + 1, i),
        SceneNode::Image { .. } => (r, t, i + 1),
    });
    log::info!("painted {rects} rects, {texts} labels, {images} icons");

    tap(&mut pad, KeyId::Special);
    log::info!(
        "focused {} after dismiss, {} clicks played",
        field.borrow().focused,
        clicks.get()
    );
    Ok(())
}
