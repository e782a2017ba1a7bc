use super::TaskError;
use crate::llm::{ChatModel, Conversation, Message};
use crate::parser::parse_comma_separated;
use crate::prompt::ChatPromptTemplate;

/// Continuation lines keep their four-space indent.
pub const COMMA_LIST_SYSTEM_PROMPT: &str =
    "You are a helpful assistant who generates comma separated lists.\n    \
     A user will pass in a category, and you should generate 5 objects in that category \
     in a comma separated list.\n    \
     ONLY return a comma separated list, and nothing more.";

pub const DEFAULT_CATEGORY: &str = "colors";

pub const DEFAULT_PREDICTION_TEXT: &str =
    "What would be a good company name for a company that makes colorful socks?";

/// Asks for five items in `category` and splits the reply.
///
/// The item count is not checked.
pub async fn generate_comma_separated_list(
    chat: &dyn ChatModel,
    category: &str,
) -> Result<Vec<String>, TaskError> {
    let prompt = ChatPromptTemplate::new(COMMA_LIST_SYSTEM_PROMPT, "{text}");
    let conversation = prompt.format_messages(&[("text", category)])?;
    let reply = chat.complete(&conversation).await?;
    Ok(parse_comma_separated(&reply))
}

/// Sends `text` as a lone user message and returns the reply.
pub async fn predict(chat: &dyn ChatModel, text: &str) -> Result<String, TaskError> {
    let conversation = Conversation::single(Message::user(text));
    Ok(chat.complete(&conversation).await?)
}
