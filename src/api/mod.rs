mod fixtures;

pub use fixtures::FixturesApi;
