const LYRICIST_MARKERS: [&str; 1] = ["作词"];
const SINGER_MARKERS: [&str; 2] = ["唱", "歌手"];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum RelationTag {
    Singer,
    Lyricist,
    Other,
}

impl RelationTag {
    pub const TRACKED: [RelationTag; 2] = [Self::Singer, Self::Lyricist];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Singer => "singer",
            Self::Lyricist => "lyricist",
            Self::Other => "other",
        }
    }

    pub fn is_tracked(self) -> bool {
        Self::TRACKED.contains(&self)
    }
}

pub fn relation_tag(question: &str) -> RelationTag {
    if LYRICIST_MARKERS.iter().any(|marker| question.contains(marker)) {
        RelationTag::Lyricist
    } else if SINGER_MARKERS.iter().any(|marker| question.contains(marker)) {
        RelationTag::Singer
    } else {
        RelationTag::Other
    }
}
