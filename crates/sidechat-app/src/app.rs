//! Popup application — wires ports to the runtime and projects events
//! into the egui panel.

use std::cell::RefCell;
use std::rc::Rc;

use sidechat_core::event_bus::EventBus;
use sidechat_core::keys::KeyStore;
use sidechat_core::ports::{LlmPort, StoragePort};
use sidechat_core::runtime::ChatRuntime;
use sidechat_platform::llm::GeminiClient;
use sidechat_platform::prompt::WindowPrompt;
use sidechat_platform::storage::detect_storage;
use sidechat_types::config::{ChatConfig, CONFIG_STORAGE_KEY};
use sidechat_ui::panels::popup::{popup_window, PopupAction};
use sidechat_ui::state::UiState;
use sidechat_ui::theme;

pub struct SidechatApp {
    ui_state: UiState,
    event_bus: EventBus,
    runtime: Rc<RefCell<ChatRuntime>>,
    llm: Rc<dyn LlmPort>,
    keys: Rc<KeyStore>,
    restored_config: Rc<RefCell<Option<ChatConfig>>>,
    first_frame: bool,
}

impl SidechatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, event_bus: EventBus) -> Self {
        let storage = detect_storage();
        let keys = Rc::new(KeyStore::new(storage.clone(), Rc::new(WindowPrompt)));
        let runtime = ChatRuntime::new(event_bus.clone());
        let llm: Rc<dyn LlmPort> = Rc::new(GeminiClient::new(ChatConfig::default()));

        let restored_config = Rc::new(RefCell::new(None));
        Self::restore_config(storage, restored_config.clone());

        Self {
            ui_state: UiState::new(),
            event_bus,
            runtime: Rc::new(RefCell::new(runtime)),
            llm,
            keys,
            restored_config,
            first_frame: true,
        }
    }

    /// Restore a config override from storage (async, best-effort).
    /// The result lands in a shared slot picked up on a later frame.
    fn restore_config(storage: Rc<dyn StoragePort>, slot: Rc<RefCell<Option<ChatConfig>>>) {
        wasm_bindgen_futures::spawn_local(async move {
            match storage.get(CONFIG_STORAGE_KEY).await {
                Ok(Some(json)) => match serde_json::from_str::<ChatConfig>(&json) {
                    Ok(config) => {
                        log::info!("config restored from storage");
                        *slot.borrow_mut() = Some(config);
                    }
                    Err(e) => log::warn!("ignoring malformed stored config: {}", e),
                },
                Ok(None) => {}
                Err(e) => log::warn!("failed to read stored config: {}", e),
            }
        });
    }

    /// Dispatch one send to the runtime (async)
    fn dispatch_send(&self, text: String, ctx: &egui::Context) {
        let runtime = self.runtime.clone();
        let llm = self.llm.clone();
        let keys = self.keys.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            runtime
                .borrow_mut()
                .run_send(&text, llm.as_ref(), &keys)
                .await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for SidechatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Swap in the restored config once it arrives
        if let Some(config) = self.restored_config.borrow_mut().take() {
            self.llm = Rc::new(GeminiClient::new(config));
        }

        // Drain events from the runtime and the sidebar button
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if let Some(action) = popup_window(ctx, &mut self.ui_state) {
            match action {
                PopupAction::Submit(text) => self.dispatch_send(text, ctx),
                PopupAction::NewChat => {
                    // The runtime is borrowed for the whole of an in-flight
                    // send; don't clear under it.
                    match self.runtime.try_borrow_mut() {
                        Ok(mut rt) => rt.new_chat(),
                        Err(_) => log::warn!("new chat ignored while a send is in flight"),
                    }
                }
                PopupAction::ShowHistory => {
                    // Surface kept, semantics intentionally absent
                    log::debug!("history view is not implemented");
                }
            }
        }

        // The sidebar button lives outside the canvas, so its events
        // arrive between frames; keep polling at a low rate.
        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}
