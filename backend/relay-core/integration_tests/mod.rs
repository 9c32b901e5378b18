mod bin_lookup;
mod helpers;
mod image_gen;
mod screenshot;
