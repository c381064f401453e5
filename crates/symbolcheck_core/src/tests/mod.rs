
mod validate;
