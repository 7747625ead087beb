use leptos::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, Url};

const ACCEPTED_FORMATS: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];
const MAX_FILE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Multi-file picker for review photos: hidden file input plus a
/// drag-and-drop surface, client-side type/size/count checks, previews with
/// per-image removal, and a hint while below the minimum count.
#[component]
pub fn ImageUploader(
    images: RwSignal<Vec<File>>,
    #[prop(default = 3)] min_images: usize,
    #[prop(default = 5)] max_images: usize,
) -> impl IntoView {
    let input_id = format!("bike-images-{}", Uuid::new_v4());
    let input_ref = create_node_ref::<html::Input>();

    let (drag_active, set_drag_active) = create_signal(false);
    let (upload_error, set_upload_error) = create_signal(None::<String>);

    let add_files = move |list: FileList| {
        let mut incoming = Vec::new();
        for index in 0..list.length() {
            let Some(file) = list.item(index) else {
                continue;
            };
            if !ACCEPTED_FORMATS.contains(&file.type_().as_str()) {
                set_upload_error.set(Some(format!(
                    "Invalid file type. Only {} are allowed.",
                    ACCEPTED_FORMATS.join(", ")
                )));
                return;
            }
            if file.size() > MAX_FILE_BYTES {
                set_upload_error.set(Some(format!(
                    "File is too large. Maximum size is {}MB.",
                    (MAX_FILE_BYTES / (1024.0 * 1024.0)) as u32
                )));
                return;
            }
            incoming.push(file);
        }
        let existing = images.with_untracked(|files| files.len());
        if existing + incoming.len() > max_images {
            set_upload_error.set(Some(format!(
                "You can only upload up to {max_images} images."
            )));
            return;
        }
        images.update(|files| files.extend(incoming));
        set_upload_error.set(None);
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(list) = input.files() {
            add_files(list);
        }
        // Allow picking the same file again after removal.
        input.set_value("");
    };

    let open_file_dialog = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let previews = move || {
        images.with(|files| {
            files
                .iter()
                .map(|file| {
                    let url = Url::create_object_url_with_blob(file).unwrap_or_default();
                    (file.name(), url)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="uploader">
            <div
                class="uploader-dropzone"
                class=("drag-active", drag_active)
                on:click=open_file_dialog
                on:dragenter=move |ev| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragover=move |ev| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragleave=move |ev| {
                    ev.prevent_default();
                    set_drag_active.set(false);
                }
                on:drop=move |ev| {
                    ev.prevent_default();
                    set_drag_active.set(false);
                    if let Some(list) = ev.data_transfer().and_then(|transfer| transfer.files()) {
                        add_files(list);
                    }
                }
            >
                <input
                    id=input_id
                    node_ref=input_ref
                    type="file"
                    class="uploader-input"
                    accept=ACCEPTED_FORMATS.join(",")
                    multiple=true
                    on:change=on_change
                    on:click=move |ev| ev.stop_propagation()
                />
                <p>
                    {move || {
                        if drag_active.get() {
                            "Drop your images here"
                        } else {
                            "Drag & drop images here or click to browse"
                        }
                    }}
                </p>
                <p class="uploader-limits">
                    {format!(
                        "Upload {min_images}-{max_images} images ({}), max {}MB each",
                        ACCEPTED_FORMATS.join(", "),
                        (MAX_FILE_BYTES / (1024.0 * 1024.0)) as u32
                    )}
                </p>
            </div>

            {move || {
                upload_error
                    .get()
                    .map(|message| view! { <p class="field-error">{message}</p> })
            }}

            {move || {
                let items = previews();
                (!items.is_empty())
                    .then(|| {
                        view! {
                            <div class="uploader-previews">
                                {items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, (name, url))| {
                                        view! {
                                            <div class="uploader-preview">
                                                <img src=url alt=format!("Preview {}", index + 1)/>
                                                <button
                                                    type="button"
                                                    class="uploader-remove"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        images.update(|files| {
                                                            files.remove(index);
                                                        });
                                                    }
                                                >
                                                    "✕"
                                                </button>
                                                <span class="uploader-name">{name}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
            }}

            {move || {
                let remaining = min_images.saturating_sub(images.with(|files| files.len()));
                (remaining > 0)
                    .then(|| {
                        view! {
                            <p class="uploader-hint">
                                {format!("{remaining} more image(s) required")}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
