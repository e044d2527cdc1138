use web_sys::{File, HtmlInputElement, Url};
use yew::prelude::*;

use crate::scholarship::basic_info::field_error;
use crate::scholarship::models::{format_file_size, DocumentKind, DocumentMeta, Documents, Field, FieldErrors};
use crate::scholarship::validation::validate_document;

/// Validates a picked file and, for images, creates its preview object URL.
pub fn describe_file(kind: DocumentKind, file: &File) -> Result<DocumentMeta, String> {
    let mut meta = DocumentMeta {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
        preview_url: None,
    };
    validate_document(kind, &meta)?;
    if meta.is_image() {
        meta.preview_url = Url::create_object_url_with_blob(file).ok();
    }
    Ok(meta)
}

pub fn release_preview(meta: &DocumentMeta) {
    if let Some(url) = &meta.preview_url {
        let _ = Url::revoke_object_url(url);
    }
}

#[derive(Properties, PartialEq)]
pub struct DocumentUploadProps {
    pub documents: Documents,
    pub errors: FieldErrors,
    pub on_pick: Callback<(DocumentKind, File)>,
    pub on_remove: Callback<DocumentKind>,
}

#[derive(Properties, PartialEq)]
struct UploadAreaProps {
    kind: DocumentKind,
    document: Option<DocumentMeta>,
    errors: FieldErrors,
    on_pick: Callback<(DocumentKind, File)>,
    on_remove: Callback<DocumentKind>,
}

#[function_component]
fn UploadArea(props: &UploadAreaProps) -> Html {
    let input_ref = use_node_ref();
    let kind = props.kind;
    let field = Field::Document(kind);
    let input_id = match kind {
        DocumentKind::Qualification => "upload-qualification",
        DocumentKind::Passport => "upload-passport",
    };

    let onchange = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_pick.emit((kind, file));
            }
            // the same file can be picked again after a remove
            input.set_value("");
        })
    };
    let replace = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
                input.click();
            }
        })
    };
    let remove = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(kind))
    };

    let state = if props.errors.contains(field) {
        "upload-area has-error"
    } else if props.document.is_some() {
        "upload-area has-file"
    } else {
        "upload-area"
    };

    let file_input = html! {
        <input
            ref={input_ref}
            id={input_id}
            type="file"
            class="hidden-input"
            accept={kind.accept_attr()}
            {onchange}
        />
    };

    html! {
        <div class={state}>
            <div class="upload-icon">
                { if kind == DocumentKind::Passport { "📷" } else { "📄" } }
            </div>
            <h4>{kind.title()}</h4>
            <p class="upload-description">{kind.description()}</p>

            {
                match &props.document {
                    None => html! {
                        <>
                            { file_input }
                            <label for={input_id} class="upload-button">{"⬆ Choose File"}</label>
                            <p class="upload-formats">
                                {format!("Max size: 5MB • Formats: {}", kind.accepted_label())}
                            </p>
                        </>
                    },
                    Some(doc) => html! {
                        <div class="uploaded-file">
                            if let Some(preview) = doc.preview_url.clone() {
                                <img class="upload-preview" src={preview} alt="Passport preview" />
                            } else {
                                <div class="file-icon">{"📄"}</div>
                            }
                            <div class="file-info">
                                <p class="file-name">{&doc.name}</p>
                                <p class="file-size">{format_file_size(doc.size)}</p>
                            </div>
                            { file_input }
                            <div class="file-actions">
                                <button type="button" class="link-button" onclick={replace}>{"Replace File"}</button>
                                <button type="button" class="remove-button" onclick={remove}>{"✕ Remove"}</button>
                            </div>
                        </div>
                    },
                }
            }

            { field_error(&props.errors, field) }
        </div>
    }
}

#[function_component]
pub fn DocumentUpload(props: &DocumentUploadProps) -> Html {
    let has_passport = props.documents.passport.is_some();

    html! {
        <div class="wizard-step">
            <div class="step-heading">
                <h3>{"Document Upload"}</h3>
                <p>{"Please upload your required documents"}</p>
            </div>

            <div class="upload-grid">
                { for DocumentKind::ALL.iter().map(|kind| html! {
                    <UploadArea
                        kind={*kind}
                        document={props.documents.get(*kind).cloned()}
                        errors={props.errors.clone()}
                        on_pick={props.on_pick.clone()}
                        on_remove={props.on_remove.clone()}
                    />
                }) }
            </div>

            if has_passport {
                <div class="info-box blue">
                    <h4>{"Photo Quality Check"}</h4>
                    <ul>
                        <li>{"Ensure the photo is clear and not blurry"}</li>
                        <li>{"Face should be clearly visible and centered"}</li>
                        <li>{"Good lighting with no shadows"}</li>
                        <li>{"Plain background (white or light colored)"}</li>
                        <li>{"Recent photo (taken within the last 6 months)"}</li>
                    </ul>
                </div>
            }

            if props.documents.is_complete() {
                <div class="step-complete">
                    {"✓ All documents uploaded successfully! You can proceed to payment."}
                </div>
            }

            <div class="info-box yellow">
                <h4>{"Important Notes:"}</h4>
                <ul>
                    <li>{"All documents must be clear and legible"}</li>
                    <li>{"File size should not exceed 5MB per document"}</li>
                    <li>{"Certificate: PDF. Photograph: JPG or PNG"}</li>
                    <li>{"Documents will be verified during the selection process"}</li>
                </ul>
            </div>
        </div>
    }
}
