mod closed_loop;
mod properties;
