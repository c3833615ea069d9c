use slidebar::*;

// a stand in for a real canvas that just logs what it is asked to draw
struct LogCanvas;
impl DrawContext for LogCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        log::info!("fill   {:?} with {:?}", rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        log::info!("stroke {:?} with {:?} ({}px)", rect, color, width);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = TrackOptions { min: 0.0, max: 100.0, value: 25.0, ..Default::default() };
    let mut track = Track::with_options(Rect::new(15.0, 15.0, 200.0, 20.0), options)
        .on_change(|value| log::info!("value changed to {:.2}", value));

    let mut tracker = DragTracker::new();
    let mut frame = DisplayList::new();

    let start = track.handle().bounds().translated(track.position()).pos + Vec2::new(10.0, 10.0);
    let pointer = [
        PointerEvent::Pressed(start),
        PointerEvent::Moved(start + Vec2::new(40.0, 0.0)),
        PointerEvent::Moved(start + Vec2::new(120.0, 5.0)),
        PointerEvent::Moved(start + Vec2::new(400.0, 5.0)),
        PointerEvent::Released,
    ];
    for event in pointer.iter() {
        let target = track.handle().bounds().translated(track.position());
        if let Some(drag) = tracker.handle(*event, target) {
            track.on_drag(drag);
        }
    }

    // the host resizes the widget into a vertical scrollbar
    track.resize_to(Vec2::new(20.0, 300.0));
    track.set_value(50.0);

    frame.clear();
    track.render(Vec2::zero(), &mut frame);
    frame.replay(&mut LogCanvas);
    log::info!("{:#?}", track);
}
