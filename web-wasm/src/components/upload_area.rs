//! 画像アップロードエリアコンポーネント

use gloo::console;
use gloo::file::{futures::read_as_bytes, File, ObjectUrl};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, FileList};
use waste_sort_common::types::is_image_mime;
use waste_sort_common::AnalysisSession;
use crate::i18n::use_i18n;

#[component]
pub fn UploadArea(session: RwSignal<AnalysisSession>) -> impl IntoView {
    let i18n = use_i18n();
    let (is_dragover, set_is_dragover) = signal(false);
    // プレビューURL（差し替え・クリア時に drop で revoke される）
    let preview = RwSignal::new_local(None::<ObjectUrl>);
    let input_ref = NodeRef::<Input>::new();

    let has_image = move || session.with(|s| s.image().is_some());

    // 新しい解析でセッションがリセットされたらプレビューも解放
    Effect::new(move |_| {
        if !has_image() {
            preview.set(None);
        }
    });

    let handle_files = move |files: FileList| {
        if let Some(file) = files.get(0) {
            select_file(File::from(file), session, preview);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            handle_files(files);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        if let Some(files) = input_ref.get().and_then(|input| input.files()) {
            handle_files(files);
        }
    };

    let clear_selection = move |_| {
        session.update(|s| s.clear_image());
        preview.set(None);
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    view! {
        <div class="upload">
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_change
            />

            <Show
                when=has_image
                fallback=move || view! {
                    <div
                        class="upload-area"
                        class:dragover=move || is_dragover.get()
                        on:drop=on_drop
                        on:dragenter=on_dragover
                        on:dragover=on_dragover
                        on:dragleave=on_dragleave
                        on:click=on_click
                    >
                        <div class="upload-icon">"📷"</div>
                        <h3>{move || i18n.t("uploadPhoto")}</h3>
                        <p class="text-muted">{move || i18n.t("uploadPhotoDescription")}</p>
                        <p class="text-muted">"JPG, PNG, WEBP"</p>
                        <Show when=move || is_dragover.get()>
                            <div class="drop-overlay">{move || i18n.t("dropPhotoHere")}</div>
                        </Show>
                    </div>
                }
            >
                <div class="upload-preview">
                    <button class="btn btn-small btn-tertiary clear-button" on:click=clear_selection>
                        "✕"
                    </button>
                    {move || preview.with(|url| url.as_ref().map(|url| {
                        let src = url.to_string();
                        view! { <img src=src alt="Uploaded waste" /> }
                    }))}
                    <div class="file-info">
                        <p class="file-name">
                            {move || session.with(|s| s.image().map(|i| i.file_name.clone()).unwrap_or_default())}
                        </p>
                        <p class="text-muted">
                            {move || session.with(|s| s.image().map(|i| i.size_label()).unwrap_or_default())}
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// 画像以外は無視。画像ならプレビューを作り、バイト列を読み込んでセッションへ
fn select_file(
    file: File,
    session: RwSignal<AnalysisSession>,
    preview: RwSignal<Option<ObjectUrl>, LocalStorage>,
) {
    let mime_type = file.raw_mime_type();
    if !is_image_mime(&mime_type) {
        console::warn!(format!("画像以外のファイルは選択できません: {}", mime_type));
        return;
    }

    let file_name = file.name();
    let url = ObjectUrl::from(file.clone());

    spawn_local(async move {
        match read_as_bytes(&file).await {
            Ok(bytes) => {
                let mut accepted = false;
                session.update(|s| accepted = s.select_image(&file_name, &mime_type, bytes));
                if accepted {
                    preview.set(Some(url));
                }
            }
            Err(e) => console::error!(format!("画像の読み込みに失敗: {}", e)),
        }
    });
}
