use spotlight_core::*;
use spotlight_prompt::*;
use web_time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Run frames until `done` holds or `limit` frames have passed.
fn run_frames(
    prompt: &mut Prompt,
    clock: &ManualClock,
    limit: usize,
    done: impl Fn(&Prompt) -> bool,
) -> usize {
    for frame in 0..limit {
        if done(prompt) {
            return frame;
        }
        clock.advance(FRAME);
        prompt.update();
    }
    limit
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let clock = ManualClock::default();
    let screen = Rect {
        x: 0.0,
        y: 0.0,
        w: 1080.0,
        h: 1920.0,
    };
    let target = Rect {
        x: 980.0,
        y: 60.0,
        w: 48.0,
        h: 48.0,
    };

    // First prompt: the user taps the highlighted target.
    let mut prompt = PromptBuilder::new()
        .geometry(StaticGeometry::around(target, screen))
        .listener(|s: PromptState, _: &mut PromptControl| log::info!("state -> {s:?}"))
        .visuals(|f: VisualFrame| {
            log::trace!(
                "{:?}: revealed {:.2} alpha {:.2} pulse {:.2}",
                f.kind,
                f.revealed_amount,
                f.alpha,
                f.pulse
            )
        })
        .back_button_dismiss_enabled(true)
        .clock(clock.clone())
        .show()?;

    let frames = run_frames(&mut prompt, &clock, 120, |p| p.state() == PromptState::Revealed);
    log::info!("revealed after {frames} frames");

    let outcome = prompt.handle_pointer(&PointerEvent::touch_down(target.center()));
    log::info!("tap on target: {outcome:?}");
    run_frames(&mut prompt, &clock, 120, |p| p.is_dismissed());

    // Second prompt: nobody touches it, so it times out.
    let mut timed = PromptBuilder::new()
        .geometry(StaticGeometry::around(target, screen))
        .listener(|s: PromptState, _: &mut PromptControl| {
            log::info!("timed state -> {s:?}")
        })
        .clock(clock.clone())
        .show_for(Duration::from_millis(1500))?;
    let frames = run_frames(&mut timed, &clock, 500, |p| p.is_dismissed());
    log::info!("timed prompt gone after {frames} frames");

    // Third prompt: the user backs out.
    let mut backed = PromptBuilder::new()
        .geometry(StaticGeometry::around(target, screen))
        .listener(|s: PromptState, _: &mut PromptControl| {
            log::info!("back state -> {s:?}")
        })
        .back_button_dismiss_enabled(true)
        .clock(clock.clone())
        .show()?;
    run_frames(&mut backed, &clock, 120, |p| p.state() == PromptState::Revealed);
    backed.handle_key(&KeyEvent::pressed(Key::Back));
    backed.handle_key(&KeyEvent::released(Key::Back));
    run_frames(&mut backed, &clock, 120, |p| p.is_dismissed());

    // A target that cannot be measured is refused up front.
    if let Err(e) = PromptBuilder::new()
        .geometry(StaticGeometry::at_point(Vec2::new(0.0, 0.0), 0.0, screen))
        .create()
    {
        log::warn!("{e}");
    }

    Ok(())
}
