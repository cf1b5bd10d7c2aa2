// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Asks through the platform's native yes/no dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct DialogConfirm;

impl api::Confirm for DialogConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        confirm(prompt).await
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::ApiConfig;
    use api::FilePart;
    use tokio::sync::oneshot;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::FileReader;
    use web_sys::HtmlInputElement;

    type Picked = Result<Option<FilePart>, String>;

    fn js_err(e: JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{e:?}"))
    }

    /// The page origin, unless `CONSOLE_API_URL` was set at build time.
    pub fn default_config() -> ApiConfig {
        if ApiConfig::is_configured() {
            return ApiConfig::from_env();
        }
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .and_then(|origin| ApiConfig::new(&origin).ok())
            .unwrap_or_default()
    }

    pub async fn confirm(prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    /// Opens the browser file picker and reads the chosen file into memory.
    ///
    /// `accept` uses the `<input accept>` syntax; empty means any file.
    pub async fn pick_file(accept: &str) -> Picked {
        let (tx, rx) = oneshot::channel::<Picked>();
        // shared by the change handler and the reader's load handler
        let tx = Rc::new(RefCell::new(Some(tx)));
        let send = |tx: &Rc<RefCell<Option<oneshot::Sender<Picked>>>>, picked: Picked| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(picked);
            }
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_string())?;
        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| "Failed to cast to HtmlInputElement".to_string())?;
        input.set_type("file");
        if !accept.is_empty() {
            input.set_accept(accept);
        }

        let onchange_closure = Closure::once(move |event: web_sys::Event| {
            let file = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                send(&tx, Ok(None));
                return;
            };
            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(e) => {
                    send(&tx, Err(js_err(e)));
                    return;
                }
            };

            let name = file.name();
            let mime = file.type_();
            let reader_clone = reader.clone();
            let tx_load = tx.clone();
            let onload_closure = Closure::once(move |_: web_sys::ProgressEvent| {
                let picked = reader_clone
                    .result()
                    .map(|buffer| {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        Some(FilePart::new(name, bytes).with_mime(mime))
                    })
                    .map_err(js_err);
                send(&tx_load, picked);
            });
            reader.set_onload(Some(onload_closure.as_ref().unchecked_ref()));
            if let Err(e) = reader.read_as_array_buffer(&file) {
                send(&tx, Err(js_err(e)));
            }
            onload_closure.forget();
        });
        input.set_onchange(Some(onchange_closure.as_ref().unchecked_ref()));
        onchange_closure.forget();

        input.click();

        rx.await.map_err(|e| e.to_string())?
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::ApiConfig;
    use api::FilePart;

    pub fn default_config() -> ApiConfig {
        ApiConfig::from_env()
    }

    pub async fn confirm(prompt: &str) -> bool {
        let answer = rfd::AsyncMessageDialog::new()
            .set_title("Kadmin")
            .set_description(prompt)
            .set_buttons(rfd::MessageButtons::OkCancel)
            .show()
            .await;
        matches!(answer, rfd::MessageDialogResult::Ok)
    }

    /// Turns an `<input accept>` value into dialog filter extensions.
    fn extensions(accept: &str) -> Vec<&str> {
        accept
            .split(',')
            .map(str::trim)
            .flat_map(|item| match item {
                "image/*" => vec!["png", "jpg", "jpeg", "gif", "webp"],
                ext if ext.starts_with('.') => vec![&ext[1..]],
                _ => vec![],
            })
            .collect()
    }

    fn mime_of(file_name: &str) -> &'static str {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "pdf" => "application/pdf",
            "md" => "text/markdown",
            "txt" => "text/plain",
            _ => "",
        }
    }

    /// Prompts the user to select a file and reads it into memory.
    pub async fn pick_file(accept: &str) -> Result<Option<FilePart>, String> {
        let mut dialog = rfd::AsyncFileDialog::new();
        let extensions = extensions(accept);
        if !extensions.is_empty() {
            dialog = dialog.add_filter("Files", &extensions);
        }

        let Some(handle) = dialog.pick_file().await else {
            return Ok(None);
        };
        let name = handle.file_name();
        let bytes = handle.read().await;
        let mime = mime_of(&name);
        Ok(Some(FilePart::new(name, bytes).with_mime(mime)))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn accept_maps_to_extensions() {
            assert_eq!(extensions(".md,.txt"), vec!["md", "txt"]);
            assert!(extensions("image/*").contains(&"jpg"));
            assert!(extensions("").is_empty());
        }

        #[test]
        fn mime_is_guessed_from_extension() {
            assert_eq!(mime_of("Cover.JPG"), "image/jpeg");
            assert_eq!(mime_of("script"), "");
        }
    }
}
