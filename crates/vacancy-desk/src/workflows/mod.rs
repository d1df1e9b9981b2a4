pub mod contact;
pub mod sourcing;
pub mod vacancy_cost;
