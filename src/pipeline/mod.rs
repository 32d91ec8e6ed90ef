// Pipeline orchestration: posts in, ranked influencers out.

pub mod recommend;
