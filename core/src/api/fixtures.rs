//! JSON bodies shaped like real API responses.

pub(crate) const ACTION: &str = r#"{
  "action": {
    "id": 13,
    "command": "start_server",
    "status": "success",
    "progress": 100,
    "started": "2016-01-30T23:55:00+00:00",
    "finished": "2016-01-30T23:56:00+00:00",
    "resources": [{ "id": 42, "type": "server" }],
    "error": { "code": "action_failed", "message": "Action failed" }
  }
}"#;

pub(crate) const ACTIONS: &str = r#"{
  "actions": [
    {
      "id": 13,
      "command": "start_server",
      "status": "running",
      "progress": 40,
      "started": "2016-01-30T23:55:00+00:00",
      "finished": null,
      "resources": [{ "id": 42, "type": "server" }],
      "error": null
    },
    {
      "id": 14,
      "command": "stop_server",
      "status": "success",
      "progress": 100,
      "started": "2016-01-30T23:57:00+00:00",
      "finished": "2016-01-30T23:58:00+00:00",
      "resources": [{ "id": 42, "type": "server" }],
      "error": null
    }
  ],
  "meta": {
    "pagination": {
      "page": 1,
      "per_page": 25,
      "previous_page": null,
      "next_page": null,
      "last_page": 1,
      "total_entries": 2
    }
  }
}"#;

const SERVER_OBJECT: &str = r#"{
  "id": 42,
  "name": "my-server",
  "status": "running",
  "created": "2016-01-30T23:50:00+00:00",
  "public_net": {
    "ipv4": { "ip": "1.2.3.4", "blocked": false, "dns_ptr": "server01.example.com" },
    "ipv6": {
      "ip": "2001:db8::/64",
      "blocked": false,
      "dns_ptr": [{ "ip": "2001:db8::1", "dns_ptr": "server.example.com" }]
    },
    "floating_ips": [478]
  },
  "server_type": {
    "id": 1,
    "name": "cx11",
    "description": "CX11",
    "cores": 1,
    "memory": 1,
    "disk": 25,
    "prices": [
      {
        "location": "fsn1",
        "price_hourly": { "net": "1.0000000000", "gross": "1.1900000000000000" },
        "price_monthly": { "net": "1.0000000000", "gross": "1.1900000000000000" }
      }
    ],
    "storage_type": "local"
  },
  "datacenter": {
    "id": 1,
    "name": "fsn1-dc8",
    "description": "Falkenstein 1 DC 8",
    "location": {
      "id": 1,
      "name": "fsn1",
      "description": "Falkenstein DC Park 1",
      "country": "DE",
      "city": "Falkenstein",
      "latitude": 50.47612,
      "longitude": 12.370071
    },
    "server_types": { "supported": [1, 2, 3], "available": [1, 2, 3] }
  },
  "image": {
    "id": 4711,
    "type": "system",
    "status": "available",
    "name": "ubuntu-20.04",
    "description": "Ubuntu 20.04 Standard 64 bit",
    "image_size": 2.3,
    "disk_size": 10,
    "created": "2016-01-30T23:55:01+00:00",
    "created_from": { "id": 1, "name": "Server" },
    "bound_to": null,
    "os_flavor": "ubuntu",
    "os_version": "20.04",
    "rapid_deploy": false,
    "protection": { "delete": false },
    "deprecated": "2018-02-28T00:00:00+00:00",
    "labels": {}
  },
  "iso": null,
  "rescue_enabled": false,
  "locked": false,
  "backup_window": "22-02",
  "outgoing_traffic": 123456,
  "ingoing_traffic": 123456,
  "included_traffic": 654321,
  "protection": { "delete": false, "rebuild": false },
  "labels": { "env": "dev" }
}"#;

pub(crate) fn server() -> String {
    format!(r#"{{ "server": {SERVER_OBJECT} }}"#)
}

pub(crate) fn servers() -> String {
    format!(
        r#"{{ "servers": [{SERVER_OBJECT}], "meta": {{ "pagination": {{ "page": 1, "per_page": 25, "last_page": 1, "total_entries": 1 }} }} }}"#
    )
}

pub(crate) fn create_server() -> String {
    format!(
        r#"{{
  "server": {SERVER_OBJECT},
  "action": {{
    "id": 1,
    "command": "create_server",
    "status": "running",
    "progress": 0,
    "started": "2016-01-30T23:50:00+00:00",
    "finished": null,
    "resources": [{{ "id": 42, "type": "server" }}],
    "error": null
  }},
  "next_actions": [],
  "root_password": "YItygq1v3GYjjMomLaKc"
}}"#
    )
}

pub(crate) fn rename_server() -> String {
    server().replace(r#""name": "my-server""#, r#""name": "new-name""#)
}

pub(crate) const DELETE_SERVER: &str = r#"{
  "action": {
    "id": 2,
    "command": "delete_server",
    "status": "running",
    "progress": 0,
    "started": "2016-01-30T23:50:00+00:00",
    "finished": null,
    "resources": [{ "id": 42, "type": "server" }],
    "error": null
  }
}"#;

pub(crate) const SERVER_TYPE: &str = r#"{
  "server_type": {
    "id": 1,
    "name": "cx11",
    "description": "CX11",
    "cores": 1,
    "memory": 1.0,
    "disk": 25,
    "deprecated": false,
    "prices": [
      {
        "location": "fsn1",
        "price_hourly": { "net": "0.0050000000", "gross": "0.0059500000000000" },
        "price_monthly": { "net": "2.9600000000", "gross": "3.5224000000000000" }
      }
    ],
    "storage_type": "local",
    "cpu_type": "shared"
  }
}"#;

pub(crate) const SERVER_TYPES: &str = r#"{
  "server_types": [
    {
      "id": 1,
      "name": "cx11",
      "description": "CX11",
      "cores": 1,
      "memory": 1.0,
      "disk": 25,
      "prices": [],
      "storage_type": "local",
      "cpu_type": "shared"
    },
    {
      "id": 2,
      "name": "cx11-ceph",
      "description": "CX11 Ceph",
      "cores": 1,
      "memory": 1.0,
      "disk": 25,
      "prices": [],
      "storage_type": "network",
      "cpu_type": "shared"
    }
  ]
}"#;

pub(crate) const PRICING: &str = r#"{
  "pricing": {
    "currency": "EUR",
    "vat_rate": "19.00",
    "image": { "price_per_gb_month": { "net": "1.0000000000", "gross": "1.1900000000000000" } },
    "floating_ip": { "price_monthly": { "net": "1.0000000000", "gross": "1.1900000000000000" } },
    "traffic": { "price_per_tb": { "net": "1.0000000000", "gross": "1.1900000000000000" } },
    "server_backup": { "percentage": "20.0000000000" },
    "server_types": [
      {
        "id": 4,
        "name": "CX11",
        "prices": [
          {
            "location": "fsn1",
            "price_hourly": { "net": "1.0000000000", "gross": "1.1900000000000000" },
            "price_monthly": { "net": "1.0000000000", "gross": "1.1900000000000000" }
          }
        ]
      }
    ]
  }
}"#;

const FLOATING_IP_OBJECT: &str = r#"{
  "id": 4711,
  "description": "Web Frontend",
  "ip": "131.232.99.1",
  "type": "ipv4",
  "server": 42,
  "dns_ptr": [{ "ip": "131.232.99.1", "dns_ptr": "server.domain.tld" }],
  "home_location": {
    "id": 1,
    "name": "fsn1",
    "description": "Falkenstein DC Park 1",
    "country": "DE",
    "city": "Falkenstein",
    "latitude": 50.47612,
    "longitude": 12.370071
  },
  "blocked": false,
  "protection": { "delete": false },
  "labels": {}
}"#;

pub(crate) fn floating_ip() -> String {
    format!(r#"{{ "floating_ip": {FLOATING_IP_OBJECT} }}"#)
}

pub(crate) fn floating_ips() -> String {
    format!(
        r#"{{ "floating_ips": [{FLOATING_IP_OBJECT}], "meta": {{ "pagination": {{ "page": 1, "per_page": 25, "last_page": 1, "total_entries": 1 }} }} }}"#
    )
}

pub(crate) const NOT_FOUND: &str = r#"{
  "error": {
    "code": "not_found",
    "message": "Server not found",
    "details": {}
  }
}"#;
