//! Deterministic in-memory chat models for tests and offline runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use super::{ChatError, ChatModel, Conversation};

/// Answers every conversation with a reply computed from it.
pub struct EchoChat<F> {
    reply: F,
}

impl<F> EchoChat<F>
where
    F: Fn(&Conversation) -> String + Send + Sync,
{
    pub fn new(reply: F) -> Self {
        Self { reply }
    }
}

#[async_trait]
impl<F> ChatModel for EchoChat<F>
where
    F: Fn(&Conversation) -> String + Send + Sync,
{
    async fn complete(&self, conversation: &Conversation) -> Result<String, ChatError> {
        Ok((self.reply)(conversation))
    }
}

/// Replays canned replies in order and records every conversation it receives.
#[derive(Debug, Default)]
pub struct ScriptedChat {
    replies: Mutex<VecDeque<String>>,
    received: Mutex<Vec<Conversation>>,
}

impl ScriptedChat {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Conversations received so far, oldest first.
    pub fn received(&self) -> Vec<Conversation> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl ChatModel for ScriptedChat {
    async fn complete(&self, conversation: &Conversation) -> Result<String, ChatError> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(conversation.clone());

        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| ChatError::Transport {
                url: "scripted".to_string(),
                message: "no scripted reply left".to_string(),
            })
    }
}
