// Domain layer - Records, sorting and presentation rules
pub mod alert;
pub mod dashboard;
pub mod developer;
pub mod issue;
pub mod metric;
pub mod notification;
pub mod rating;
pub mod sorting;
pub mod style;
pub mod team;
pub mod trends;
