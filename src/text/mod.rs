// Text handling: caption/hashtag cleaning and business description expansion.

pub mod expand;
pub mod normalize;
