//! Gateway: the main event loop connecting channels to the lookup pipeline.
//!
//! Conversations are handled concurrently, but one message at a time per
//! chat: messages arriving while a chat is busy are queued and answered in
//! arrival order. Commands answer instantly; everything else goes through
//! `Lookup::resolve_and_render` and the resulting blocks are delivered in
//! order.


use crate::commands::{self, Command, CommandContext};
use holocron_core::{
    markup::MarkupMode,
    message::{IncomingMessage, OutgoingMessage, OutputBlock},
    traits::Channel,
};
use holocron_report::Lookup;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Routes messages between channels and the lookup pipeline.
pub struct Gateway {
    lookup: Arc<Lookup>,
    channels: HashMap<String, Arc<dyn Channel>>,
    bot_name: String,
    uptime: Instant,
    /// Chats with a message in progress, and what they sent meanwhile.
    active_chats: Mutex<HashMap<String, VecDeque<IncomingMessage>>>,
}

impl Gateway {
    pub fn new(
        lookup: Arc<Lookup>,
        channels: HashMap<String, Arc<dyn Channel>>,
        bot_name: String,
    ) -> Self {
        Self {
            lookup,
            channels,
            bot_name,
            uptime: Instant::now(),
            active_chats: Mutex::new(HashMap::new()),
        }
    }

    /// Run the main event loop until Ctrl+C or every channel closes.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "{} gateway running | channels: {} | catalog: {} units",
            self.bot_name,
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
            self.lookup.catalog().unit_count(),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        let mut tasks = JoinSet::new();
        loop {
            tokio::select! {
                msg = rx.recv() => {
                    let Some(msg) = msg else {
                        warn!("all channels closed");
                        break;
                    };
                    self.dispatch_message(msg, &mut tasks).await;
                }
                Some(done) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = done {
                        error!("message task failed: {e}");
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("shutdown signal received");
                    break;
                }
            }
        }

        if !tasks.is_empty() {
            info!("waiting for {} conversation(s) to finish", tasks.len());
        }
        while let Some(done) = tasks.join_next().await {
            if let Err(e) = done {
                error!("message task failed: {e}");
            }
        }

        self.shutdown().await;
        Ok(())
    }

    async fn shutdown(&self) {
        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }
        info!("{} gateway stopped", self.bot_name);
    }

    /// Queue the message if its chat is busy, otherwise start a worker for it.
    async fn dispatch_message(self: &Arc<Self>, msg: IncomingMessage, tasks: &mut JoinSet<()>) {
        let key = chat_key(&msg);
        {
            let mut active = self.active_chats.lock().await;
            if let Some(queue) = active.get_mut(&key) {
                debug!("queued message from {key} (reply in progress)");
                queue.push_back(msg);
                return;
            }
            active.insert(key.clone(), VecDeque::new());
        }

        let gw = self.clone();
        tasks.spawn(async move { gw.work_chat(key, msg).await });
    }

    /// Answer `first`, then everything the chat queued meanwhile.
    async fn work_chat(&self, key: String, first: IncomingMessage) {
        self.handle_message(first).await;
        loop {
            let next = {
                let mut active = self.active_chats.lock().await;
                match active.get_mut(&key).and_then(VecDeque::pop_front) {
                    Some(msg) => msg,
                    None => {
                        active.remove(&key);
                        return;
                    }
                }
            };
            debug!("processing queued message from {key}");
            self.handle_message(next).await;
        }
    }

    async fn handle_message(&self, msg: IncomingMessage) {
        let Some(channel) = self.channels.get(&msg.channel) else {
            error!("message from unknown channel '{}'", msg.channel);
            return;
        };

        if let Some(ref target) = msg.reply_target {
            if let Err(e) = channel.send_typing(target).await {
                debug!("typing indicator failed: {e}");
            }
        }

        let blocks = self.respond(&msg).await;
        for block in blocks {
            let out = OutgoingMessage::new(block, msg.reply_target.clone());
            if let Err(e) = channel.send(out).await {
                error!("failed to deliver reply to {}: {e}", msg.sender_id);
                break;
            }
        }
    }

    /// Blocks answering one message, in delivery order.
    pub(crate) async fn respond(&self, msg: &IncomingMessage) -> Vec<OutputBlock> {
        if let Some(cmd) = Command::parse(&msg.text) {
            let ctx = CommandContext {
                lookup: &self.lookup,
                sender_id: &msg.sender_id,
                text: &msg.text,
                uptime: &self.uptime,
                bot_name: &self.bot_name,
            };
            let reply = commands::handle(cmd, &ctx).await;
            return vec![OutputBlock::text(reply, MarkupMode::Plain)];
        }

        self.lookup
            .resolve_and_render(&msg.text, &msg.sender_id)
            .await
    }
}

/// Conversation identity: the chat replies go to, else the sender.
fn chat_key(msg: &IncomingMessage) -> String {
    let target = msg.reply_target.as_deref().unwrap_or(&msg.sender_id);
    format!("{}:{target}", msg.channel)
}
