mod bin_lookup;
mod image_gen;
