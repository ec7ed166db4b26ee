//! Optics Slides entry point
//!
//! On the web this mounts the slide deck into the page and wires the controls.
//! Natively it prints the SVG of one lesson to stdout.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlInputElement};

    use optics_slides::{DeckSettings, EntryTicket, LessonPanel, SlideDeck};

    /// App instance holding the deck and the mounted lesson
    struct App {
        deck: SlideDeck,
        /// Present only while the deck is showing
        panel: Option<LessonPanel>,
        settings: DeckSettings,
    }

    impl App {
        fn new(settings: DeckSettings) -> Self {
            Self {
                deck: SlideDeck::standard(&settings),
                panel: None,
                settings,
            }
        }

        /// Replace the panel with a fresh one for the current lesson (or drop it when hidden)
        fn remount(&mut self) {
            self.panel = self.deck.current_lesson().map(LessonPanel::mount);
        }

        /// Push deck and lesson state into the DOM
        fn render(&self) {
            let Some(document) = document() else {
                return;
            };

            set_hidden(&document, "home", self.deck.is_visible());
            set_hidden(&document, "deck", !self.deck.is_visible());
            set_class(&document, "deck", "entered", self.deck.entry_animation_active());
            set_hidden(&document, "prev-btn", !self.deck.can_go_prev());
            set_hidden(&document, "next-btn", !self.deck.can_go_next());

            let Some(panel) = &self.panel else {
                return;
            };

            if let Some(el) = document.get_element_by_id("lesson-title") {
                el.set_text_content(Some(panel.title()));
            }
            if let Some(el) = document.get_element_by_id("diagram") {
                el.set_inner_html(&panel.render_svg());
            }
            if let Some(el) = document.get_element_by_id("readout") {
                el.set_text_content(Some(&panel.readout()));
            }
            if let Some(el) = document.get_element_by_id("lesson-text") {
                el.set_inner_html(&panel.text().to_html());
            }

            let angle = panel.angle_range();
            if let Some(input) = input_by_id(&document, "angle-input") {
                input.set_min(&angle.min.to_string());
                input.set_max(&angle.max.to_string());
                input.set_step(&angle.step.to_string());
                let _ = input.set_value_as_number(panel.angle_deg());
            }
            if let Some(el) = document.get_element_by_id("angle-value") {
                el.set_text_content(Some(&format!("{:.0}°", panel.angle_deg())));
            }

            match (panel, panel.index_range()) {
                (LessonPanel::Refraction(params), Some(range)) => {
                    set_hidden(&document, "index-group", false);
                    if let Some(input) = input_by_id(&document, "index-input") {
                        input.set_min(&range.min.to_string());
                        input.set_max(&range.max.to_string());
                        input.set_step(&range.step.to_string());
                        let _ = input.set_value_as_number(params.refractive_index_second_medium());
                    }
                    if let Some(el) = document.get_element_by_id("index-value") {
                        el.set_text_content(Some(&format!(
                            "n₂ = {:.2}",
                            params.refractive_index_second_medium()
                        )));
                    }
                }
                _ => set_hidden(&document, "index-group", true),
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn set_class(document: &Document, id: &str, class: &str, on: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let list = el.class_list();
            let _ = if on {
                list.add_1(class)
            } else {
                list.remove_1(class)
            };
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        set_class(document, id, "hidden", hidden);
    }

    /// Raise the entry flag after the configured delay, unless the deck moved on
    fn schedule_entry(app: Rc<RefCell<App>>, ticket: EntryTicket, delay_ms: u32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move || {
            let mut a = app.borrow_mut();
            if a.deck.complete_entry(ticket) {
                a.render();
            }
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        );
        closure.forget();
    }

    fn open_deck(app: &Rc<RefCell<App>>) {
        let (ticket, delay_ms) = {
            let mut a = app.borrow_mut();
            let ticket = a.deck.open();
            a.remount();
            a.render();
            (ticket, a.settings.effective_entry_delay_ms())
        };
        if let Some(ticket) = ticket {
            log::info!("Deck opened");
            schedule_entry(app.clone(), ticket, delay_ms);
        }
    }

    fn close_deck(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        a.deck.close();
        a.remount();
        a.render();
        log::info!("Deck closed");
    }

    fn next_lesson(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        if a.deck.next() {
            a.remount();
            a.render();
        }
    }

    fn prev_lesson(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        if a.deck.prev() {
            a.remount();
            a.render();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Optics Slides starting...");

        let Some(document) = document() else {
            log::error!("No document, nothing to mount");
            return;
        };

        let settings = DeckSettings::load();
        let app = Rc::new(RefCell::new(App::new(settings)));

        setup_buttons(&document, app.clone());
        setup_sliders(&document, app.clone());
        setup_keyboard(app.clone());

        app.borrow().render();

        {
            let app = app.borrow();
            let order: Vec<&str> = app.deck.lessons().iter().map(|l| l.as_str()).collect();
            log::info!(
                "Optics Slides ready ({} lessons: {}, {})",
                app.deck.len(),
                order.join(" -> "),
                app.deck.resume_policy().as_str()
            );
        }
    }

    fn on_click(document: &Document, id: &str, app: Rc<RefCell<App>>, action: fn(&Rc<RefCell<App>>)) {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("Missing #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            action(&app);
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) {
        on_click(document, "view-content", app.clone(), open_deck);
        on_click(document, "close-btn", app.clone(), close_deck);
        on_click(document, "prev-btn", app.clone(), prev_lesson);
        on_click(document, "next-btn", app, next_lesson);
    }

    fn setup_sliders(document: &Document, app: Rc<RefCell<App>>) {
        // Angle of incidence
        if let Some(input) = input_by_id(document, "angle-input") {
            let app = app.clone();
            let source = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut a = app.borrow_mut();
                let value = source.value_as_number();
                if let Some(panel) = a.panel.as_mut() {
                    if let Err(e) = panel.set_angle(value) {
                        log::warn!("Rejected angle: {}", e);
                    }
                }
                a.render();
            });
            let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Refractive index of the lower medium
        if let Some(input) = input_by_id(document, "index-input") {
            let source = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut a = app.borrow_mut();
                let value = source.value_as_number();
                if let Some(panel) = a.panel.as_mut() {
                    if let Err(e) = panel.set_refractive_index(value) {
                        log::warn!("Rejected refractive index: {}", e);
                    }
                }
                a.render();
            });
            let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if !app.borrow().deck.is_visible() {
                return;
            }
            match event.key().as_str() {
                "ArrowRight" => next_lesson(&app),
                "ArrowLeft" => prev_lesson(&app),
                "Escape" => close_deck(&app),
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use optics_slides::{LessonError, LessonId, LessonPanel, LessonResult};

    pub const USAGE: &str = "usage: optics-slides [reflection|refraction] [angle_deg] [n2]";

    fn parse_number(arg: &str, what: &str) -> LessonResult<f64> {
        arg.parse::<f64>()
            .map_err(|_| LessonError::Config(format!("{what} must be a number, got '{arg}'")))
    }

    /// Build the requested lesson panel and return its SVG
    pub fn run(args: &[String]) -> LessonResult<String> {
        let lesson = match args.first() {
            Some(name) => LessonId::from_str(name)
                .ok_or_else(|| LessonError::Config(format!("unknown lesson '{name}'")))?,
            None => LessonId::Reflection,
        };

        let mut panel = LessonPanel::mount(lesson);
        if let Some(arg) = args.get(1) {
            panel.set_angle(parse_number(arg, "angle")?)?;
        }
        if let Some(arg) = args.get(2) {
            if !panel.set_refractive_index(parse_number(arg, "n2")?)? {
                log::warn!("{} has no second medium, n2 ignored", lesson.as_str());
            }
        }

        log::info!("{}: {}", panel.title(), panel.readout());
        Ok(panel.render_svg())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_defaults_to_reflection() {
            let svg = run(&[]).unwrap();
            assert!(svg.contains("∠i: 30°"));
        }

        #[test]
        fn test_refraction_args() {
            let svg = run(&args(&["refraction", "45", "2.0"])).unwrap();
            assert!(svg.contains("θ₁ 45°"));
            assert!(svg.contains("n₂ = 2.00"));
        }

        #[test]
        fn test_bad_args() {
            assert!(matches!(run(&args(&["prism"])), Err(LessonError::Config(_))));
            assert!(matches!(
                run(&args(&["reflection", "abc"])),
                Err(LessonError::Config(_))
            ));
            assert!(matches!(
                run(&args(&["reflection", "5"])),
                Err(LessonError::InvalidParameter { .. })
            ));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Optics Slides (native) - run with `trunk serve` for the interactive deck");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match native::run(&args) {
        Ok(svg) => println!("{svg}"),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", native::USAGE);
            std::process::exit(2);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
