mod flags;
mod format;
mod metadata;
mod normalizer;
