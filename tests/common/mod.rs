// common/mod.rs
//
// fixture files shared by the integration tests

use std::{fs, path::Path};

/// Writes a full, valid set of the five config files under `dir`.
/// settings.json names "dev", so the subsystem section is dev.json.
pub fn write_fixtures(dir: &Path) {
    fs::create_dir_all(dir).unwrap();

    fs::write(
        dir.join("settings.json"),
        r#"{"env":"dev","services":["deposit","withdraw"]}"#,
    )
    .unwrap();

    fs::write(
        dir.join("dev.json"),
        r#"{
            "db": {
                "url": "postgres://db.internal:5432",
                "name": "wallet",
                "username": "wallet",
                "password": "hunter2",
                "max_conn": 32
            },
            "redis": {
                "password": "redispass",
                "time_format": "2006-01-02 15:04:05",
                "process_pub_key": "pk-1",
                "clusters": [
                    {"name": "main", "url": "redis://10.0.0.1:6379"},
                    {"name": "sub", "url": "redis://10.0.0.2:6379"}
                ]
            },
            "apis": {
                "rpc": {"active": true, "port": 8545},
                "socket": {"active": false, "port": 9000},
                "mq": {"active": true}
            },
            "callbacks": {
                "redis": {"active": false},
                "rpc": {
                    "active": true,
                    "deposit_url": "http://hub.internal/deposit",
                    "withdraw_url": "http://hub.internal/withdraw",
                    "collect_url": "http://hub.internal/collect"
                },
                "mq": {"active": false}
            }
        }"#,
    )
    .unwrap();

    fs::write(
        dir.join("coin.json"),
        r#"{
            "name": "eth",
            "url": "http://127.0.0.1:8545",
            "assistSite": "https://explorer.example",
            "decimal": 18,
            "stable": 0,
            "rpcUser": "rpc",
            "rpcPassword": "secret",
            "collect": "0xc011ec7",
            "deposit": "0xde9051",
            "minCollect": 0.05,
            "collectInterval": 30000000000,
            "tradePassword": "trade",
            "unlockDuration": 300,
            "withdraw": "0xd17d4a"
        }"#,
    )
    .unwrap();

    fs::write(
        dir.join("message.json"),
        r#"{
            "logs": {"debug": true},
            "level": {"db": "warn", "rpc": "info"},
            "storage": {
                "file": {
                    "active": true,
                    "split": "daily",
                    "split_mode": "size",
                    "rotate": "7d",
                    "path": "/var/log/walletd",
                    "nameFormat": "%Y%m%d.log"
                }
            },
            "errors": {"1001": "insufficient balance"},
            "warnings": {"2001": "node lagging"},
            "information": {"3001": "deposit seen"},
            "debugs": {"4001": "raw tx"}
        }"#,
    )
    .unwrap();

    fs::write(
        dir.join("command.json"),
        r#"{
            "unknown": "unknown command, try help",
            "help": "usage: walletd <command>",
            "version": "walletd 0.1.0"
        }"#,
    )
    .unwrap();
}
