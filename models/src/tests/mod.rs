mod bin_metadata;
mod normalized_bin;
