mod priority;
mod queue;
