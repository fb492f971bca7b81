mod provider_registry;
mod relay;
