//! Main application component.

use std::rc::Rc;

use orquesta_editor::{EditorSettings, MountConfig, PaneLayout, YamlDocument};
use yew::prelude::*;

use crate::components::{WorkflowPreview, YamlEditor};

/// Committed workflow text, replaced on each debounced change.
#[derive(Clone, Default, PartialEq)]
pub struct DocumentState(YamlDocument);

impl Reducible for DocumentState {
    type Action = String;

    fn reduce(self: Rc<Self>, source: String) -> Rc<Self> {
        let mut document = self.0.clone();
        document.commit(source);
        Rc::new(Self(document))
    }
}

#[derive(Properties, PartialEq)]
pub struct EditorViewProps {
    pub config: MountConfig,
}

/// Two-pane view: YAML editor on the left, workflow preview on the right.
#[function_component(EditorView)]
pub fn editor_view(props: &EditorViewProps) -> Html {
    let document = use_reducer(DocumentState::default);
    let settings = EditorSettings::default();
    let layout = PaneLayout::default();

    let on_change = {
        let document = document.dispatcher();
        Callback::from(move |text: String| document.dispatch(text))
    };

    html! {
        <div class="container-fluid pl-0 pr-0">
            <div class="row ml-0 mr-0">
                <div class={classes!(layout.editor_class(), "pl-0", "pr-0")}>
                    <YamlEditor
                        id={props.config.editor_id.clone()}
                        settings={settings}
                        on_change={on_change}
                    />
                </div>
                <div class={classes!(layout.preview_class(), "pl-0", "pr-0")}>
                    <WorkflowPreview yaml={document.0.source().to_string()} />
                </div>
            </div>
        </div>
    }
}
