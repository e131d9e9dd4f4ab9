// Chat assistant service - Keyword response selection over a canned topic set
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::domain::chat::ChatMessage;
use crate::infrastructure::config::{AssistantConfig, TopicConfig};

/// Pick the reply for a user message: first topic whose keyword set matches
/// the lower-cased input wins, otherwise the fallback. Topic order is
/// priority order.
pub fn select_reply<'a>(input: &str, topics: &'a [TopicConfig], fallback: &'a str) -> &'a str {
    let input = input.to_lowercase();
    topics
        .iter()
        .find(|topic| topic.keywords.iter().any(|k| input.contains(k.as_str())))
        .map(|topic| topic.reply.as_str())
        .unwrap_or(fallback)
}

#[derive(Clone)]
pub struct AssistantService {
    config: AssistantConfig,
    transcript: Arc<Mutex<Vec<ChatMessage>>>,
    next_id: Arc<AtomicU64>,
}

impl AssistantService {
    pub fn new(config: AssistantConfig) -> Self {
        let greeting = ChatMessage::from_bot(1, config.greeting.clone());
        Self {
            config,
            transcript: Arc::new(Mutex::new(vec![greeting])),
            next_id: Arc::new(AtomicU64::new(2)),
        }
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.clone()
    }

    /// Append the user message, wait the synthetic delay, then append and
    /// return the selected reply. The delay is cosmetic latency only.
    pub async fn send(&self, text: &str) -> ChatMessage {
        let user_message = ChatMessage::from_user(self.bump_id(), text);
        self.transcript.lock().await.push(user_message);

        tokio::time::sleep(Duration::from_millis(self.config.reply_delay_ms)).await;

        let reply_text = select_reply(text, &self.config.topics, &self.config.fallback);
        let reply = ChatMessage::from_bot(self.bump_id(), reply_text);
        self.transcript.lock().await.push(reply.clone());
        reply
    }

    fn bump_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics() -> Vec<TopicConfig> {
        vec![
            TopicConfig {
                id: "vendors".to_string(),
                keywords: vec!["vendor".to_string(), "supplier".to_string()],
                reply: "vendor reply".to_string(),
            },
            TopicConfig {
                id: "costs".to_string(),
                keywords: vec!["cost".to_string(), "price".to_string()],
                reply: "cost reply".to_string(),
            },
            TopicConfig {
                id: "delivery".to_string(),
                keywords: vec!["delivery".to_string(), "timeline".to_string()],
                reply: "delivery reply".to_string(),
            },
        ]
    }

    #[test]
    fn test_vendor_keywords_select_vendor_topic() {
        let topics = topics();
        assert_eq!(select_reply("show me vendors", &topics, "fb"), "vendor reply");
        assert_eq!(select_reply("best SUPPLIER?", &topics, "fb"), "vendor reply");
    }

    #[test]
    fn test_unknown_input_falls_back() {
        let topics = topics();
        assert_eq!(select_reply("hello there", &topics, "fb"), "fb");
        assert_eq!(select_reply("", &topics, "fb"), "fb");
    }

    #[test]
    fn test_topic_priority_order() {
        // Both topics match, the earlier one wins
        let topics = topics();
        assert_eq!(
            select_reply("vendor cost comparison", &topics, "fb"),
            "vendor reply"
        );
        assert_eq!(
            select_reply("cost of delivery", &topics, "fb"),
            "cost reply"
        );
    }

    fn test_config() -> AssistantConfig {
        AssistantConfig {
            greeting: "hello".to_string(),
            fallback: "fb".to_string(),
            reply_delay_ms: 0,
            topics: topics(),
        }
    }

    #[tokio::test]
    async fn test_transcript_starts_with_greeting() {
        let service = AssistantService::new(test_config());
        let transcript = service.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert!(transcript[0].is_bot);
        assert_eq!(transcript[0].text, "hello");
    }

    #[tokio::test]
    async fn test_send_appends_user_and_bot_messages() {
        let service = AssistantService::new(test_config());
        let reply = service.send("which vendor is best?").await;
        assert!(reply.is_bot);
        assert_eq!(reply.text, "vendor reply");

        let transcript = service.transcript().await;
        assert_eq!(transcript.len(), 3);
        assert!(!transcript[1].is_bot);
        assert_eq!(transcript[1].text, "which vendor is best?");
        // Message ids are unique and increasing
        assert_ne!(transcript[1].id, transcript[2].id);
    }
}
