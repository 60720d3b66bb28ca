mod report;
mod settings;

use mousekit_core::prelude::*;
use mousekit_platform_desktop_winit::DesktopWinitSource;
use std::rc::Rc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

struct DemoApp {
    source: Rc<DesktopWinitSource>,
    tracker: MouseTracker<Rc<DesktopWinitSource>>,
    options: Option<PartialMouseEvents>,
    window: Option<Window>,
    shown_version: Option<u64>,
}

impl DemoApp {
    fn new(options: Option<PartialMouseEvents>) -> Self {
        let source = Rc::new(DesktopWinitSource::default());
        let tracker = MouseTracker::new(Some(Rc::clone(&source)));
        Self {
            source,
            tracker,
            options,
            window: None,
            shown_version: None,
        }
    }

    /// `Moved` carries the outer position; the client area origin comes from the window.
    fn sync_window_origin(&self) {
        if let Some(origin) = self
            .window
            .as_ref()
            .and_then(|window| window.inner_position().ok())
        {
            self.source.set_window_origin(origin);
        }
    }

    /// Renders the tracker and prints the report if the snapshot changed.
    fn present(&mut self) {
        let snapshot = self.tracker.render(self.options);
        let version = self.tracker.state().version();
        if self.shown_version == Some(version) {
            return;
        }
        self.shown_version = Some(version);
        println!();
        for line in report::report_lines(snapshot.as_ref()) {
            println!("{line}");
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title("Mousekit")
            .with_inner_size(LogicalSize::new(800.0, 600.0));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                self.source.set_scale_factor(window.scale_factor());
                self.window = Some(window);
                self.sync_window_origin();
            }
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            self.tracker.dispose();
            event_loop.exit();
            return;
        }
        if let WindowEvent::Moved(_) | WindowEvent::ScaleFactorChanged { .. } = event {
            self.sync_window_origin();
        }
        if self.source.handle_window_event(&event) > 0 {
            self.present();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = match settings::events_from_env() {
        Ok(options) => options,
        Err(err) => {
            log::error!("invalid {}: {err}", settings::EVENTS_VAR);
            std::process::exit(2);
        }
    };
    log::info!(
        "observing {:?}",
        MouseEvents::resolve(options).active_kinds()
    );

    println!("=== Mousekit Desktop Example ===");
    println!("Move, click and scroll inside the window.");
    println!("Set {} to limit the observed events.", settings::EVENTS_VAR);

    let event_loop = EventLoop::new()?;
    let mut app = DemoApp::new(options);
    app.present();
    event_loop.run_app(&mut app)?;
    Ok(())
}
