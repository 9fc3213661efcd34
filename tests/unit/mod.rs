mod assignment;
mod due;
mod machine;
mod phases;
mod validation;
