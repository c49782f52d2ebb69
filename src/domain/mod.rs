// Domain layer: the check model shared by the client, the runner and the config loaders.

pub mod model;
