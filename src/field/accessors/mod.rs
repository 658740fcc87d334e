mod density;
mod velocity;
mod obstacles;
mod pointers;
