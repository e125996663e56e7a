mod gallery;
mod settings;
