//! UI components for the editor page.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo::timers::callback::Timeout;
use orquesta_editor::{EditorSession, EditorSettings, Highlighter, insert_soft_tab};
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

type Shared<T> = Rc<RefCell<T>>;

/// Monotonic page clock for the editor session.
fn now() -> Duration {
    let millis = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now);
    Duration::from_secs_f64(millis.max(0.0) / 1000.0)
}

/// Handles shared between the editor's event callbacks and its timer.
#[derive(Clone)]
struct EditorHandles {
    session: Shared<EditorSession>,
    timer: Shared<Option<Timeout>>,
    on_change: Shared<Callback<String>>,
}

impl EditorHandles {
    /// Feed the editor text to the session and restart the quiet period.
    fn keystroke(&self, text: String) {
        let delay = {
            let mut session = self.session.borrow_mut();
            session.keystroke(text, now());
            session.settings().debounce
        };
        self.arm(delay);
    }

    /// Replace the pending timer. Dropping the old `Timeout` cancels it.
    fn arm(&self, delay: Duration) {
        let millis = u32::try_from(delay.as_micros().div_ceil(1000)).unwrap_or(u32::MAX);
        let handles = self.clone();
        let timeout = Timeout::new(millis, move || handles.deliver());
        *self.timer.borrow_mut() = Some(timeout);
    }

    /// Commit the pending text if due, otherwise wait out the rest.
    fn deliver(&self) {
        let now = now();
        let committed = self.session.borrow_mut().tick(now).map(str::to_string);
        match committed {
            Some(text) => {
                let on_change = self.on_change.borrow().clone();
                on_change.emit(text);
            }
            None => {
                let remaining = self.session.borrow().remaining(now);
                if let Some(rest) = remaining {
                    self.arm(rest);
                }
            }
        }
    }

    fn teardown(&self) {
        if let Some(timeout) = self.timer.borrow_mut().take() {
            timeout.cancel();
        }
        let mut session = self.session.borrow_mut();
        if session.has_pending() {
            log::debug!("editor unmounted with a pending change");
        }
        session.teardown();
    }
}

/// YAML editor pane.
#[derive(Properties, PartialEq)]
pub struct YamlEditorProps {
    /// Id and name of the textarea.
    pub id: AttrValue,
    pub settings: EditorSettings,
    /// Receives the full text once typing pauses.
    pub on_change: Callback<String>,
}

#[function_component(YamlEditor)]
pub fn yaml_editor(props: &YamlEditorProps) -> Html {
    let settings = &props.settings;
    let handles = EditorHandles {
        session: use_mut_ref(|| EditorSession::new(settings.clone())),
        timer: use_mut_ref(|| None),
        on_change: use_mut_ref(|| props.on_change.clone()),
    };
    *handles.on_change.borrow_mut() = props.on_change.clone();

    let highlighter = use_memo(settings.clone(), |settings| {
        Highlighter::for_settings(settings)
            .inspect_err(|e| log::warn!("syntax highlighting disabled: {}", e))
            .ok()
    });
    let overlay = use_node_ref();
    let redraw = use_force_update();

    // Drop any pending delivery on unmount
    {
        let handles = handles.clone();
        use_effect_with((), move |_| move || handles.teardown());
    }

    let on_input = {
        let handles = handles.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            handles.keystroke(target.value());
            redraw.force_update();
        })
    };

    let on_keydown = {
        let handles = handles.clone();
        let tab_size = settings.tab_size;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Tab" || e.shift_key() || e.ctrl_key() || e.alt_key() || e.meta_key() {
                return;
            }
            e.prevent_default();

            let target: HtmlTextAreaElement = e.target_unchecked_into();
            let value = target.value();
            let start = target.selection_start().ok().flatten().unwrap_or(0);
            let end = target.selection_end().ok().flatten().unwrap_or(start);
            let edit = insert_soft_tab(&value, start, end, tab_size);

            target.set_value(&edit.text);
            let _ = target.set_selection_range(edit.caret, edit.caret);
            // set_value does not raise an input event
            handles.keystroke(edit.text);
            redraw.force_update();
        })
    };

    let on_scroll = {
        let overlay = overlay.clone();
        Callback::from(move |e: Event| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            if let Some(pre) = overlay.cast::<HtmlElement>() {
                pre.set_scroll_top(target.scroll_top());
                pre.set_scroll_left(target.scroll_left());
            }
        })
    };

    let session = handles.session.borrow();
    let lines = match &*highlighter {
        Some(highlighter) if !session.placeholder_visible() => highlighter
            .highlight(session.buffer())
            .inspect_err(|e| log::warn!("highlighting failed: {}", e))
            .ok(),
        _ => None,
    };
    let background = (*highlighter)
        .as_ref()
        .and_then(|h| h.background())
        .map(|color| format!("background: {};", color));
    let highlighted = lines.is_some();

    let style = format!("height: {}; width: {};", settings.height, settings.width);

    html! {
        <div
            class={classes!(
                "yaml-editor",
                format!("theme-{}", settings.theme),
                format!("mode-{}", settings.mode),
            )}
            style={style}
        >
            <pre ref={overlay} class="yaml-highlight" aria-hidden="true" style={background}>
                if let Some(lines) = lines {
                    { for lines.iter().flatten().map(|span| html! {
                        <span style={span.css()}>{ &span.text }</span>
                    })}
                    // keeps a trailing empty line as tall as the textarea's
                    { "\n" }
                }
            </pre>
            <textarea
                id={props.id.clone()}
                name={props.id.clone()}
                class={classes!("yaml-editor-input", highlighted.then_some("highlighted"))}
                data-mode={settings.mode}
                data-tab-size={settings.tab_size.to_string()}
                placeholder={settings.placeholder}
                spellcheck="false"
                oninput={on_input}
                onkeydown={on_keydown}
                onscroll={on_scroll}
            />
            if settings.show_print_margin {
                <div class="print-margin" />
            }
        </div>
    }
}

/// Workflow preview pane.
#[derive(Properties, PartialEq)]
pub struct WorkflowPreviewProps {
    /// Committed YAML text, passed through unchanged.
    pub yaml: String,
}

#[function_component(WorkflowPreview)]
pub fn workflow_preview(props: &WorkflowPreviewProps) -> Html {
    let lines = props.yaml.lines().count();

    html! {
        <div class="panel preview-panel">
            <div class="panel-header">
                <h2>{ "Workflow" }</h2>
                if !props.yaml.is_empty() {
                    <span class="stats">{ format!("{} lines", lines) }</span>
                }
            </div>
            <div class="panel-content">
                if props.yaml.is_empty() {
                    <div class="hint">{ "Start typing a workflow to see it here." }</div>
                } else {
                    <pre class="workflow-source">{ &props.yaml }</pre>
                }
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit};
    use yew::platform::time::sleep;

    wasm_bindgen_test_configure!(run_in_browser);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mount_editor(id: &str, emitted: Shared<Vec<String>>) -> yew::AppHandle<YamlEditor> {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let props = YamlEditorProps {
            id: AttrValue::from(id.to_string()),
            settings: EditorSettings::default(),
            on_change: Callback::from(move |text: String| emitted.borrow_mut().push(text)),
        };
        yew::Renderer::<YamlEditor>::with_root_and_props(root, props).render()
    }

    fn type_text(id: &str, text: &str) {
        let textarea: HtmlTextAreaElement = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id(id)
            .unwrap()
            .dyn_into()
            .unwrap();
        textarea.set_value(text);

        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).unwrap();
        textarea.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_rapid_input_emits_once() {
        let emitted: Shared<Vec<String>> = Rc::default();
        let _app = mount_editor("editor-rapid", emitted.clone());
        sleep(ms(20)).await;

        type_text("editor-rapid", "a");
        sleep(ms(100)).await;
        type_text("editor-rapid", "ab");
        sleep(ms(100)).await;
        type_text("editor-rapid", "abc");

        sleep(ms(400)).await;
        assert!(emitted.borrow().is_empty());

        sleep(ms(700)).await;
        assert_eq!(*emitted.borrow(), vec!["abc".to_string()]);
    }

    #[wasm_bindgen_test]
    async fn test_spaced_input_emits_each_text() {
        let emitted: Shared<Vec<String>> = Rc::default();
        let _app = mount_editor("editor-spaced", emitted.clone());
        sleep(ms(20)).await;

        type_text("editor-spaced", "a");
        sleep(ms(1000)).await;
        type_text("editor-spaced", "ab");
        sleep(ms(1000)).await;

        assert_eq!(*emitted.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[wasm_bindgen_test]
    async fn test_unmount_drops_pending_edit() {
        let emitted: Shared<Vec<String>> = Rc::default();
        let app = mount_editor("editor-unmount", emitted.clone());
        sleep(ms(20)).await;

        type_text("editor-unmount", "a");
        app.destroy();
        sleep(ms(1000)).await;

        assert!(emitted.borrow().is_empty());
    }
}
