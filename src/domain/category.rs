//! Content categories and the instruction text each one sends to the provider.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Content style selected by the user before each request.
///
/// Unknown labels never fail: they resolve to [`ContentCategory::Generic`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentCategory {
    #[default]
    SocialMediaCaption,
    BlogIdea,
    ProductDescription,
    EmailTemplate,
    Generic,
}

impl ContentCategory {
    /// Selectable categories in display order. `Generic` is the fallback and is
    /// not offered to users.
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::SocialMediaCaption,
        ContentCategory::BlogIdea,
        ContentCategory::ProductDescription,
        ContentCategory::EmailTemplate,
    ];

    /// Exact-match lookup of a user supplied label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Social Media Caption" => Self::SocialMediaCaption,
            "Blog Idea" => Self::BlogIdea,
            "Product Description" => Self::ProductDescription,
            "Email Template" => Self::EmailTemplate,
            _ => Self::Generic,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SocialMediaCaption => "Social Media Caption",
            Self::BlogIdea => "Blog Idea",
            Self::ProductDescription => "Product Description",
            Self::EmailTemplate => "Email Template",
            Self::Generic => "Generic",
        }
    }

    /// System instruction describing the output shape expected for this
    /// category. The shape is requested, not verified.
    pub const fn instruction(self) -> &'static str {
        match self {
            Self::SocialMediaCaption => {
                "You are a social media expert. Generate 3 distinct social media caption options for the following topic: 1) Short & Punchy, 2) Engaging/Question-based, and 3) Storytelling/Longer. For each option, include relevant emojis and 3-5 popular hashtags. Also provide a brief 'Image Idea' that would go well with these captions."
            }
            Self::BlogIdea => {
                "You are a professional content strategist. Generate 5 creative, SEO-friendly blog post titles and a detailed outline for ONE of them based on the following topic. The outline should include an Introduction, 3 Main Body Paragraphs with key points, and a Conclusion."
            }
            Self::ProductDescription => {
                "You are a professional copywriter. Write a persuasive, compelling, and human-like product description for the following product. Focus on benefits rather than just features. Use sensory words to make it appealing. Structure it with a catchy headline, a short paragraph, and a bulleted list of key features."
            }
            Self::EmailTemplate => {
                "You are a business communication expert. Write a professional, polite, and clear email template for the following scenario. Include a Subject Line, Salutation, Body, and Closing. Use placeholders like [Name] where necessary."
            }
            Self::Generic => {
                "You are a helpful AI assistant. Generate high-quality, human-like content for the following request."
            }
        }
    }
}

/// Resolve any caller supplied label to its system instruction.
pub fn resolve(label: &str) -> &'static str {
    ContentCategory::from_label(label).instruction()
}

impl Display for ContentCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for ContentCategory {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<&str> for ContentCategory {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl From<ContentCategory> for String {
    fn from(value: ContentCategory) -> Self {
        value.label().to_string()
    }
}
