pub(crate) mod health_check_controller;
pub(crate) mod stats_controller;
pub(crate) mod topic_controller;
pub(crate) mod trend_controller;
pub(crate) mod wordcloud_controller;
