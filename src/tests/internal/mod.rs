
mod create_dir;
mod list_contents;
mod manage;
mod path_prefixer;
mod visibility;
