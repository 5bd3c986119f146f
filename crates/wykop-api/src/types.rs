//! Request vocabulary for the endpoint catalog
//!
//! Closed sets of values the API accepts in paths and query strings, plus the
//! payload structs shared by several endpoints. Optional fields are passed
//! through as `null` and stripped by the dispatcher, so "not set" never reaches
//! the wire.

use wykop_auth::Params;

/// Link listing: front page or the upcoming queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Homepage,
    Upcoming,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Homepage => "homepage",
            LinkType::Upcoming => "upcoming",
        }
    }
}

/// Reason attached to a down vote. Sent as a numeric path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVoteDownReason {
    Duplicate,
    Spam,
    Untrue,
    Inappropriate,
    Unsuitable,
}

impl LinkVoteDownReason {
    pub fn value(&self) -> u8 {
        match self {
            LinkVoteDownReason::Duplicate => 1,
            LinkVoteDownReason::Spam => 2,
            LinkVoteDownReason::Untrue => 3,
            LinkVoteDownReason::Inappropriate => 4,
            LinkVoteDownReason::Unsuitable => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkCommentSortType {
    #[default]
    Newest,
    Best,
    Oldest,
}

impl LinkCommentSortType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkCommentSortType::Newest => "newest",
            LinkCommentSortType::Best => "best",
            LinkCommentSortType::Oldest => "oldest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCommentVoteType {
    Up,
    Down,
}

impl LinkCommentVoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkCommentVoteType::Up => "up",
            LinkCommentVoteType::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntriesSortType {
    #[default]
    Hot,
    Newest,
    Active,
}

impl EntriesSortType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntriesSortType::Hot => "hot",
            EntriesSortType::Newest => "newest",
            EntriesSortType::Active => "active",
        }
    }
}

/// Time window in hours. Only honored together with `EntriesSortType::Hot`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntriesLastUpdate {
    One,
    Two,
    Three,
    Six,
    #[default]
    Twelve,
    TwentyFour,
}

impl EntriesLastUpdate {
    pub fn hours(&self) -> u8 {
        match self {
            EntriesLastUpdate::One => 1,
            EntriesLastUpdate::Two => 2,
            EntriesLastUpdate::Three => 3,
            EntriesLastUpdate::Six => 6,
            EntriesLastUpdate::Twelve => 12,
            EntriesLastUpdate::TwentyFour => 24,
        }
    }
}

/// What an uploaded photo will be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPhotosType {
    Settings,
    Comments,
    Links,
}

impl MediaPhotosType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaPhotosType::Settings => "settings",
            MediaPhotosType::Comments => "comments",
            MediaPhotosType::Links => "links",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamSortType {
    #[default]
    All,
    Best,
}

impl StreamSortType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamSortType::All => "all",
            StreamSortType::Best => "best",
        }
    }
}

/// Page cursor and size for listing endpoints.
///
/// Anonymous callers page by number; logged-in callers get `next`/`prev`
/// hashes back and pass those as `page` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    pub page: Option<String>,
    pub limit: Option<u32>,
}

impl Paging {
    pub fn page(page: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("page", self.page.clone())
            .with("limit", self.limit)
    }
}

/// Filters for a tag stream (entries and links under one tag).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamQuery {
    pub sort: StreamSortType,
    pub paging: Paging,
    pub year: Option<u16>,
    pub month: Option<u8>,
}

impl StreamQuery {
    pub(crate) fn to_params(&self) -> Params {
        self.paging
            .to_params()
            .with("sort", self.sort.as_str())
            .with("year", self.year)
            .with("month", self.month)
    }
}

/// Body of an entry, entry comment or link comment.
///
/// `photo` is a key returned by the media upload endpoints; `embed` is a key
/// returned by the embed endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentInput {
    pub content: Option<String>,
    pub photo: Option<String>,
    pub embed: Option<String>,
    pub adult: Option<bool>,
}

impl ContentInput {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("content", self.content.clone())
            .with("photo", self.photo.clone())
            .with("embed", self.embed.clone())
            .with("adult", self.adult)
    }
}

/// Full link metadata, used to edit a published link or publish a draft.
///
/// At most 6 tags, without `#`. Omitting `photo` on edit removes the current
/// image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkUpdate {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub adult: bool,
    pub photo: Option<String>,
}

impl LinkUpdate {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("title", self.title.as_str())
            .with("description", self.description.as_str())
            .with("tags", self.tags.clone())
            .with("adult", self.adult)
            .with("photo", self.photo.clone())
    }
}

/// Partial edit of a draft. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub adult: Option<bool>,
    pub photo: Option<String>,
}

impl DraftUpdate {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("title", self.title.clone())
            .with("description", self.description.clone())
            .with("tags", self.tags.clone())
            .with("adult", self.adult)
            .with("photo", self.photo.clone())
    }
}
