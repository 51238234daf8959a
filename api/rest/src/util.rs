pub mod ws_broadcast;
