//! Stateless single-turn text analysis.

use colloquy_client::{ChatClient, CompletionService, conversions};
use colloquy_core::{ClientConfig, Message, Role};
use colloquy_error::{ColloquyResult, ServiceError};
use std::path::Path;
use std::sync::Arc;
use tracing::instrument;

/// System message establishing the analyst persona.
const ANALYST_PERSONA: &str = "你是一个专业的文本分析助手，请提供详细的分析结果。\n\
    You are a professional text analysis assistant, please provide detailed analysis results.";

const GENERAL_TEMPLATE: &str = "请对以下文本进行全面分析，包括主要内容、写作风格、逻辑结构等方面：\n\
    Please provide a comprehensive analysis of the following text, including main content, writing style, and logical structure:\n";

const SENTIMENT_TEMPLATE: &str = "请对以下文本进行情感分析，包括情感倾向、情感强度等方面：\n\
    Please analyze the sentiment of the following text, including emotional tendency and intensity:\n";

const SUMMARY_TEMPLATE: &str = "请对以下文本进行摘要，提取主要观点和关键信息：\n\
    Please summarize the following text, extracting main points and key information:\n";

const KEYWORDS_TEMPLATE: &str = "请从以下文本中提取关键词和主题词，并简要说明其重要性：\n\
    Please extract keywords and themes from the following text, and briefly explain their importance:\n";

/// The kind of analysis to request.
///
/// Each kind selects a fixed bilingual prompt template. Template selection is
/// pure: identical `(text, kind)` inputs always produce identical requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisKind {
    /// Comprehensive analysis of content, style, and structure
    #[default]
    General,
    /// Sentiment and emotional intensity
    Sentiment,
    /// Summary of main points
    Summary,
    /// Keyword and theme extraction
    Keywords,
}

impl AnalysisKind {
    /// Parses a kind name, falling back to [`AnalysisKind::General`] for
    /// anything unrecognized. The fallback is intentional, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use colloquy::AnalysisKind;
    ///
    /// assert_eq!(AnalysisKind::from_name("sentiment"), AnalysisKind::Sentiment);
    /// assert_eq!(AnalysisKind::from_name("unknown-value"), AnalysisKind::General);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "sentiment" => AnalysisKind::Sentiment,
            "summary" => AnalysisKind::Summary,
            "keywords" => AnalysisKind::Keywords,
            _ => AnalysisKind::General,
        }
    }

    /// Returns the prompt template for this kind.
    pub fn template(&self) -> &'static str {
        match self {
            AnalysisKind::General => GENERAL_TEMPLATE,
            AnalysisKind::Sentiment => SENTIMENT_TEMPLATE,
            AnalysisKind::Summary => SUMMARY_TEMPLATE,
            AnalysisKind::Keywords => KEYWORDS_TEMPLATE,
        }
    }
}

/// Stateless text analyzer over a remote completion service.
///
/// Every call is an independent single-turn request; no history is retained
/// between calls. The analyzer holds only its immutable configuration and
/// the service handle.
pub struct TextAnalyzer {
    config: ClientConfig,
    service: Arc<dyn CompletionService>,
}

impl TextAnalyzer {
    /// Creates an analyzer from a JSON configuration file.
    ///
    /// In addition to the common required fields, the analyzer requires an
    /// explicit `api_url`.
    ///
    /// # Errors
    ///
    /// Fails with a `NotFound` config error when the file is absent, or an
    /// `Invalid` one when it is malformed or missing a required field
    /// (including `api_url`).
    #[instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> ColloquyResult<Self> {
        let config = ClientConfig::from_file(path)?;
        config.require_api_url()?;
        let client = ChatClient::from_config(&config)?;
        Ok(Self::with_service(config, Arc::new(client)))
    }

    /// Creates an analyzer over an arbitrary completion service.
    pub fn with_service(config: ClientConfig, service: Arc<dyn CompletionService>) -> Self {
        Self { config, service }
    }

    /// Analyzes text and returns the raw result.
    ///
    /// Builds a two-message single-turn request: the analyst persona as the
    /// system message, and the kind's template followed by `text` as the
    /// user message.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] for transport failures, non-success
    /// statuses, and malformed response bodies.
    #[instrument(skip(self, text), fields(kind = ?kind))]
    pub async fn try_analyze(
        &self,
        text: &str,
        kind: AnalysisKind,
    ) -> Result<String, ServiceError> {
        let messages = vec![
            Message::new(Role::System, ANALYST_PERSONA),
            Message::new(Role::User, format!("{}{}", kind.template(), text)),
        ];

        let request = conversions::to_chat_request(&messages, &self.config)?;
        let response = self.service.complete(&request).await?;

        conversions::first_choice_content(&response)
    }

    /// Analyzes text, converting any failure into a diagnostic string.
    ///
    /// A non-success status yields a string containing the status code and
    /// the raw response body; any other failure yields a string with the
    /// cause. Callers that need to branch on failure should use
    /// [`try_analyze`](TextAnalyzer::try_analyze).
    pub async fn analyze(&self, text: &str, kind: AnalysisKind) -> String {
        match self.try_analyze(text, kind).await {
            Ok(result) => result,
            Err(ServiceError::Api { status, message }) => {
                format!("API请求失败 | API request failed: {} - {}", status, message)
            }
            Err(e) => format!("分析过程中发生错误 | Error occurred during analysis: {}", e),
        }
    }

    /// Returns the analyzer configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
