//! The closed set of style tokens and their class strings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::UnknownTokenError;
use super::table::StyleTable;
use crate::util::class_tokens;

/// Two-column grid wrapping the article and its table of contents.
pub const BASE_LAYOUT_CONTAINER: &str = "sm:grid sm:grid-cols-[3fr_1fr] sm:gap-x-10 sm:items-start";
pub const POST_TITLE: &str = "title mb-2";
/// Row holding the publish date and the tag list.
pub const DATE_AND_TAGS: &str =
    "flex flex-col sm:gap-y-2 md:flex-row md:items-center md:gap-y-0 md:divide-x md:divide-textColor";
pub const POST_DATE: &str = "pr-2";
pub const TAGS_CONTAINER: &str = "flex items-center md:pl-2";
pub const POST_TAGS_LIST: &str = "flex items-center ml-1 gap-x-2";
pub const TAG_LINK: &str = "inline-block cactus-link";
/// Typography for rendered post bodies.
pub const BLOG_POST_CONTENT: &str = "mt-8 prose prose-sm prose-cactus prose-headings:font-semibold prose-headings:before:text-accent prose-headings:before:absolute prose-headings:before:-ml-4 prose-th:before:content-none";
/// Hidden on narrow screens, sticky sidebar from `sm` up.
pub const TOC_ASIDE: &str = "invisible hidden text-right sm:sticky sm:top-20 sm:block sm:visible";
pub const TOC_HEADER: &str = "font-semibold";
pub const TOC_UNORDERED_LIST: &str = "mt-4 text-xs space-y-2";
pub const TOC_HEADING: &str = "line-clamp-2 hover:text-accent";
pub const POST_PREVIEW_TITLE: &str = "inline-block cactus-link line-clamp-1 text-xl";
pub const POST_PREVIEW_DATE: &str = "min-w-[120px] text-gray-500 text-xl";
pub const POST_PREVIEW_DESC: &str = "block italic line-clamp-3 mt-4 mb-4 text-lg";
pub const COVER_IMAGE: &str = "mt-4";
/// Intentionally empty: preview covers get no extra classes.
pub const COVER_PREVIEW_IMAGE: &str = "";
pub const FOOTER_CONTAINER: &str = "flex flex-wrap items-center sm:items-center gap-x-4";

/// A named slot in the theme's markup that carries a fixed class string.
///
/// Variants serialize as their camelCase names (`postTitle`, `tocHeader`, ...),
/// which are also the names templates use.
///
/// # Example
///
/// ```rust
/// use cactus_styles::StyleToken;
///
/// assert_eq!(StyleToken::PostTitle.classes(), "title mb-2");
/// assert_eq!(StyleToken::PostTitle.name(), "postTitle");
/// assert_eq!("tocHeader".parse::<StyleToken>().unwrap(), StyleToken::TocHeader);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleToken {
    BaseLayoutContainer,
    PostTitle,
    DateAndTags,
    PostDate,
    TagsContainer,
    PostTagsList,
    TagLink,
    BlogPostContent,
    TocAside,
    TocHeader,
    TocUnorderedList,
    TocHeading,
    PostPreviewTitle,
    PostPreviewDate,
    PostPreviewDesc,
    CoverImage,
    CoverPreviewImage,
    FooterContainer,
}

impl StyleToken {
    /// Every token, in table order.
    pub const ALL: [StyleToken; 18] = [
        StyleToken::BaseLayoutContainer,
        StyleToken::PostTitle,
        StyleToken::DateAndTags,
        StyleToken::PostDate,
        StyleToken::TagsContainer,
        StyleToken::PostTagsList,
        StyleToken::TagLink,
        StyleToken::BlogPostContent,
        StyleToken::TocAside,
        StyleToken::TocHeader,
        StyleToken::TocUnorderedList,
        StyleToken::TocHeading,
        StyleToken::PostPreviewTitle,
        StyleToken::PostPreviewDate,
        StyleToken::PostPreviewDesc,
        StyleToken::CoverImage,
        StyleToken::CoverPreviewImage,
        StyleToken::FooterContainer,
    ];

    /// Returns the identifier templates use for this token.
    pub const fn name(self) -> &'static str {
        match self {
            StyleToken::BaseLayoutContainer => "baseLayoutContainer",
            StyleToken::PostTitle => "postTitle",
            StyleToken::DateAndTags => "dateAndTags",
            StyleToken::PostDate => "postDate",
            StyleToken::TagsContainer => "tagsContainer",
            StyleToken::PostTagsList => "postTagsList",
            StyleToken::TagLink => "tagLink",
            StyleToken::BlogPostContent => "blogPostContent",
            StyleToken::TocAside => "tocAside",
            StyleToken::TocHeader => "tocHeader",
            StyleToken::TocUnorderedList => "tocUnorderedList",
            StyleToken::TocHeading => "tocHeading",
            StyleToken::PostPreviewTitle => "postPreviewTitle",
            StyleToken::PostPreviewDate => "postPreviewDate",
            StyleToken::PostPreviewDesc => "postPreviewDesc",
            StyleToken::CoverImage => "coverImage",
            StyleToken::CoverPreviewImage => "coverPreviewImage",
            StyleToken::FooterContainer => "footerContainer",
        }
    }

    /// Returns the class string for this token, exactly as defined.
    pub const fn classes(self) -> &'static str {
        match self {
            StyleToken::BaseLayoutContainer => BASE_LAYOUT_CONTAINER,
            StyleToken::PostTitle => POST_TITLE,
            StyleToken::DateAndTags => DATE_AND_TAGS,
            StyleToken::PostDate => POST_DATE,
            StyleToken::TagsContainer => TAGS_CONTAINER,
            StyleToken::PostTagsList => POST_TAGS_LIST,
            StyleToken::TagLink => TAG_LINK,
            StyleToken::BlogPostContent => BLOG_POST_CONTENT,
            StyleToken::TocAside => TOC_ASIDE,
            StyleToken::TocHeader => TOC_HEADER,
            StyleToken::TocUnorderedList => TOC_UNORDERED_LIST,
            StyleToken::TocHeading => TOC_HEADING,
            StyleToken::PostPreviewTitle => POST_PREVIEW_TITLE,
            StyleToken::PostPreviewDate => POST_PREVIEW_DATE,
            StyleToken::PostPreviewDesc => POST_PREVIEW_DESC,
            StyleToken::CoverImage => COVER_IMAGE,
            StyleToken::CoverPreviewImage => COVER_PREVIEW_IMAGE,
            StyleToken::FooterContainer => FOOTER_CONTAINER,
        }
    }

    /// Iterates over the individual utility classes of this token.
    pub fn class_list(self) -> std::str::SplitWhitespace<'static> {
        class_tokens(self.classes())
    }

    /// Resolves a token by its template identifier. Matching is exact and
    /// case-sensitive.
    pub fn from_name(name: &str) -> Option<StyleToken> {
        StyleTable::global().token(name)
    }
}

impl std::fmt::Display for StyleToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleToken {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleToken::from_name(s).ok_or_else(|| UnknownTokenError::new(s))
    }
}
