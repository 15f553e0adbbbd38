pub mod analyze;
pub mod health;
pub mod information;
pub mod instructions;
pub mod joke;
pub mod meal_plan;
pub mod search;
pub mod similar;
pub mod substitutes;

pub use analyze::analyze_handler;
pub use health::health_handler;
pub use information::information_handler;
pub use instructions::instructions_handler;
pub use joke::joke_handler;
pub use meal_plan::meal_plan_handler;
pub use search::search_handler;
pub use similar::similar_handler;
pub use substitutes::substitutes_handler;
