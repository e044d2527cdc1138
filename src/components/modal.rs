use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-panel" onclick={keep_open}>
                <div class="modal-header">
                    <h3>{props.title.clone()}</h3>
                    <button class="modal-close" onclick={close}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-panel {
                    background: white;
                    border-radius: 0.75rem;
                    max-width: 48rem;
                    width: 100%;
                    max-height: 90vh;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .modal-header h3 { margin: 0; color: #1f2937; }
                .modal-close {
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    cursor: pointer;
                    color: #6b7280;
                }
                .modal-body { padding: 1.5rem; overflow-y: auto; }
                "#}
            </style>
        </div>
    }
}
