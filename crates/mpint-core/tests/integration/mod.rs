mod byte_codec;
mod limits_config;
