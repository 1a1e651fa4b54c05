// Domain layer - Dashboard content model
pub mod chart;
pub mod dataset;
pub mod fragment;
pub mod kpi;
pub mod palette;
pub mod tab;
