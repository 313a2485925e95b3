//! A scripted session against a headless window, for watching the
//! border's behaviour without a compositor.
//!
//! Every request the border makes is applied to an in-memory window and
//! logged. Since there is no compositor to report size changes, the script
//! feeds them back to the host itself after every resize.

use std::error::Error;
use std::time::{Duration, Instant};

use tracing::{info, Level};
use tracing_subscriber::{fmt as logger, fmt::format::FmtSpan};

use winborder::border::{GestureState, PanGesture, PointState, TapGesture, Touch};
use winborder::config::no_checks;
use winborder::types::{Point, Real, Size};
use winborder::{BorderConfig, BorderHost, DefaultBorder, HeadlessWindow, InputEvent, Window};

fn resync(host: &mut BorderHost<HeadlessWindow>) {
    let size = host.window().size();
    host.handle_resized(size);
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    logger::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_max_level(Level::TRACE)
        .without_time()
        .try_init()?;

    let config = BorderConfig::builder()
        .max_size(Size::new(1600, 1000))
        .finish(no_checks)?;

    let window = HeadlessWindow::new(Size::<i32, Real>::new(640, 480));
    let mut host = BorderHost::new(window);
    host.enable_border(Some(Box::new(DefaultBorder::with_config(config))))?;
    resync(&mut host);

    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);

    // drag the right edge outwards
    let right = Point::new(645.0, 240.0);
    for (state, dx) in [
        (GestureState::Started, 0.0),
        (GestureState::Continuing, 24.0),
        (GestureState::Continuing, 16.0),
        (GestureState::Finished, 0.0),
    ] {
        let pan = PanGesture::new(state, right, Point::new(dx, 0.0));
        host.dispatch(InputEvent::BorderPan(pan), at(0));
        resync(&mut host);
    }
    info!("after resize: bordered {}", host.bordered_size());

    // rest two fingers on the window, then triple tap the overlay
    let rest = Touch::new(PointState::Stationary, 2, Point::new(320.0, 200.0));
    host.dispatch(InputEvent::WindowTouch(rest), at(100));
    host.tick(at(250));
    host.tick(at(400));
    host.dispatch(InputEvent::OverlayTap(TapGesture { taps: 3 }), at(500));
    resync(&mut host);
    info!("after triple tap: maximized = {}", host.window().is_maximized());

    // a single tap puts the window back down
    host.dispatch(InputEvent::OverlayTap(TapGesture { taps: 1 }), at(600));
    info!("overlay views left: {}", host.window().views().len());

    host.dispose_border();
    info!("{} requests made", host.window().requests().len());

    Ok(())
}
