use crate::charts::DashboardData;
use crate::chat::client::ChatClient;
use crate::chat::{self, ChatMessage, Transcript};
use crate::config::AppConfig;
use crate::ui::chat_panel::ChatPanel;
use crate::ui::dashboard;
use eframe::egui;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

pub struct DashboardApp {
    data: DashboardData,
    transcript: Transcript,
    chat_panel: ChatPanel,
    /// None when no usable endpoint is configured; the assistant stays off
    /// for the whole app lifetime.
    chat_client: Option<ChatClient>,
    reply_tx: mpsc::UnboundedSender<String>,
    reply_rx: mpsc::UnboundedReceiver<String>,
    /// Sends whose reply has not been drained yet.
    pending_sends: usize,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, data: DashboardData) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let chat_client = if config.has_chat_endpoint() {
            Some(ChatClient::new(config.chat_endpoint.trim()))
        } else {
            tracing::error!("Chat endpoint not configured; career assistant disabled");
            None
        };

        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        Self {
            data,
            transcript: Transcript::default(),
            chat_panel: ChatPanel::default(),
            chat_client,
            reply_tx,
            reply_rx,
            pending_sends: 0,
        }
    }

    fn send_message(&mut self, text: String) {
        let Some(client) = self.chat_client.clone() else {
            return;
        };

        self.transcript.push(ChatMessage::user(text.clone()));

        // Each send is independent: no retries, no cancellation, and replies
        // from overlapping sends may land out of request order.
        let tx = self.reply_tx.clone();
        self.pending_sends += 1;
        tokio::spawn(async move {
            let reply = chat::reply_or_fallback(client.send(&text).await);
            let _ = tx.send(reply);
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain finished chat requests onto the transcript
        loop {
            match self.reply_rx.try_recv() {
                Ok(reply) => {
                    self.transcript.push(ChatMessage::bot(reply));
                    self.pending_sends = self.pending_sends.saturating_sub(1);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                ui.heading(
                    egui::RichText::new("📊 Job Demand Dashboard")
                        .size(24.0)
                        .color(egui::Color32::from_rgb(100, 200, 255)),
                );
                ui.add_space(14.0);

                dashboard::show(ui, &self.data);
            });
        });

        if self.chat_client.is_some() {
            if let Some(text) = self.chat_panel.show(ctx, &self.transcript) {
                self.send_message(text);
            }
        }

        // Keep repainting only while requests are still in flight
        if self.pending_sends > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
