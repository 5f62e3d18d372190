//! GTK4 visual surface: title, zoom slider with readout, era legend and a
//! horizontally scrollable drawing area wired to pointer motion.

use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::{TimelineChart, legend_entries};
use crate::core::ZoomLevel;
use crate::dataset::Dataset;
use crate::error::TimelineResult;
use crate::render::{CairoRenderer, Color};

pub const WINDOW_TITLE: &str = "唐代著名诗人生卒时间线";
const APPLICATION_ID: &str = "dev.poet_timeline.Timeline";
const SWATCH_SIZE_PX: i32 = 16;

type SharedChart = Rc<RefCell<TimelineChart<CairoRenderer>>>;

/// Widget tree around one chart; embed `root()` into any container.
pub struct GtkTimelineAdapter {
    chart: SharedChart,
    root: gtk::Box,
    canvas: gtk::DrawingArea,
}

impl GtkTimelineAdapter {
    pub fn new(dataset: Dataset) -> TimelineResult<Self> {
        let chart = Rc::new(RefCell::new(TimelineChart::new(
            CairoRenderer::new(1, 1)?,
            dataset,
        )?));

        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.set_margin_top(16);
        root.set_margin_start(16);
        root.set_margin_end(16);

        let title = gtk::Label::new(Some(WINDOW_TITLE));
        title.add_css_class("title-1");
        root.append(&title);

        let controls = gtk::Box::new(gtk::Orientation::Horizontal, 24);
        controls.set_halign(gtk::Align::Center);
        root.append(&controls);

        let canvas = gtk::DrawingArea::new();
        let adapter = Self {
            chart,
            root,
            canvas,
        };
        controls.append(&adapter.build_zoom_control());
        controls.append(&build_legend());

        adapter.resize_canvas();
        adapter.connect_canvas();

        let scroller = gtk::ScrolledWindow::new();
        scroller.set_policy(gtk::PolicyType::Automatic, gtk::PolicyType::Automatic);
        scroller.set_vexpand(true);
        scroller.set_child(Some(&adapter.canvas));
        adapter.root.append(&scroller);

        Ok(adapter)
    }

    #[must_use]
    pub fn root(&self) -> &gtk::Box {
        &self.root
    }

    fn build_zoom_control(&self) -> gtk::Box {
        let container = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        container.append(&gtk::Label::new(Some("缩放比例:")));

        let slider = gtk::Scale::with_range(
            gtk::Orientation::Horizontal,
            f64::from(ZoomLevel::MIN.get()),
            f64::from(ZoomLevel::MAX.get()),
            1.0,
        );
        slider.set_digits(0);
        slider.set_draw_value(false);
        slider.set_width_request(128);
        slider.set_value(f64::from(self.chart.borrow().zoom().get()));

        let readout = gtk::Label::new(Some(&self.chart.borrow().zoom().to_string()));
        readout.set_width_chars(2);

        let chart = Rc::clone(&self.chart);
        let canvas = self.canvas.clone();
        let readout_label = readout.clone();
        slider.connect_value_changed(move |slider| {
            let zoom = ZoomLevel::clamped(slider.value().round() as i64);
            let changed = chart.borrow_mut().set_zoom(zoom);
            if changed {
                readout_label.set_text(&zoom.to_string());
                resize(&chart, &canvas);
                canvas.queue_draw();
            }
        });

        container.append(&slider);
        container.append(&readout);
        container
    }

    fn resize_canvas(&self) {
        resize(&self.chart, &self.canvas);
    }

    fn connect_canvas(&self) {
        let chart = Rc::clone(&self.chart);
        self.canvas.set_draw_func(move |_area, context, _width, _height| {
            if let Err(err) = chart.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "timeline draw failed");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let chart = Rc::clone(&self.chart);
        let canvas = self.canvas.clone();
        motion.connect_motion(move |_, x, y| {
            chart.borrow_mut().pointer_move(x, y);
            canvas.queue_draw();
        });
        let chart = Rc::clone(&self.chart);
        let canvas = self.canvas.clone();
        motion.connect_leave(move |_| {
            chart.borrow_mut().pointer_leave();
            canvas.queue_draw();
        });
        self.canvas.add_controller(motion);
    }
}

fn resize(chart: &SharedChart, canvas: &gtk::DrawingArea) {
    let viewport = chart.borrow().viewport();
    canvas.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
    canvas.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
}

fn build_legend() -> gtk::Box {
    let legend = gtk::Box::new(gtk::Orientation::Horizontal, 16);
    for entry in legend_entries() {
        let item = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        item.append(&build_swatch(entry.color));
        item.append(&gtk::Label::new(Some(entry.label)));
        legend.append(&item);
    }
    legend
}

fn build_swatch(color: Color) -> gtk::DrawingArea {
    let swatch = gtk::DrawingArea::new();
    swatch.set_content_width(SWATCH_SIZE_PX);
    swatch.set_content_height(SWATCH_SIZE_PX);
    swatch.set_valign(gtk::Align::Center);
    swatch.set_draw_func(move |_area, context, width, height| {
        context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
        context.rectangle(0.0, 0.0, f64::from(width), f64::from(height));
        if let Err(err) = context.fill() {
            warn!(error = %err, "legend swatch draw failed");
        }
    });
    swatch
}

/// Runs a standalone application window around `dataset`.
pub fn run_timeline_window(dataset: Dataset) -> TimelineResult<gtk::glib::ExitCode> {
    // Validate up front so layout errors surface before the main loop starts.
    dataset.layout.validate()?;

    let application = gtk::Application::builder()
        .application_id(APPLICATION_ID)
        .build();
    application.connect_activate(move |app| match GtkTimelineAdapter::new(dataset.clone()) {
        Ok(adapter) => {
            let window = gtk::ApplicationWindow::builder()
                .application(app)
                .title(WINDOW_TITLE)
                .default_width(1280)
                .default_height(900)
                .child(adapter.root())
                .build();
            window.present();
        }
        Err(err) => {
            warn!(error = %err, "failed to build timeline window");
            app.quit();
        }
    });

    Ok(application.run_with_args::<&str>(&[]))
}
