mod cards;
mod lookup;
mod metadata;
