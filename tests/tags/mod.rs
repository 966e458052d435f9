mod create;
mod delete;
mod detail;
mod list;
mod update;
