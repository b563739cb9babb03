//! Snapshot tests for C# fragment generation.
//!
//! These tests verify that rendered type expressions and initializers
//! match expected output. Run `cargo insta review` to update snapshots
//! when making intentional changes.

use rosharp_codegen::{CsTypeMapper, default_value, render_scalar, render_value};
use rosharp_idl::{BasicType, Member, MemberType, Message, ScalarType, ScalarValue};

/// Parse a resolved message the way one arrives from the parser.
fn message_from_json(json: &str) -> Message {
    serde_json::from_str(json).expect("fixture message should deserialize")
}

/// Render one field declaration the way the class template splices it.
fn render_field(mapper: &CsTypeMapper, member: &Member) -> String {
    let cs_type = mapper
        .map_member_type(&member.ty)
        .expect("member type should map");
    let initializer = if let Some(default) = member.default.as_ref() {
        render_value(&member.ty, Some(default)).expect("default should render")
    } else {
        match &member.ty {
            MemberType::Container { kind, element } => mapper
                .array_initializer(kind, element)
                .expect("container should have an initializer"),
            MemberType::Scalar(ScalarType::Named(_)) => format!("new {}()", cs_type),
            MemberType::Scalar(_) => default_value(&member.ty).to_string(),
        }
    };
    format!("public {} {} = {};", cs_type, member.name, initializer)
}

fn render_fields(mapper: &CsTypeMapper, message: &Message) -> String {
    message
        .members
        .iter()
        .map(|member| render_field(mapper, member))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_builtin_type_table() {
    let table = CsTypeMapper::default_type_names()
        .iter()
        .map(|(name, cs)| format!("{} => {}", name, cs))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(table, @r"
    byte => sbyte
    octet => sbyte
    char => byte
    bool => bool
    boolean => bool
    uint8 => byte
    int8 => sbyte
    uint16 => System.UInt16
    int16 => System.Int16
    uint32 => System.UInt32
    int32 => System.Int32
    uint64 => System.UInt64
    int64 => System.Int64
    float => float
    float32 => float
    float64 => double
    double => double
    string => string
    time => ROSBridgeLib.msg_helpers.Time
    duration => ROSBridgeLib.msg_helpers.Duration
    ");
}

#[test]
fn test_imu_fields() {
    let imu = message_from_json(
        r#"
        {
          "type": {"namespaces": ["sensor_msgs", "msg"], "name": "Imu"},
          "members": [
            {"name": "header",
             "type": {"scalar": {"named": {"namespaces": ["std_msgs", "msg"], "name": "Header"}}}},
            {"name": "orientation",
             "type": {"scalar": {"named": {"namespaces": ["geometry_msgs", "msg"], "name": "Quaternion"}}}},
            {"name": "orientation_covariance",
             "type": {"container": {"kind": {"array": {"size": 9}}, "element": {"basic": "double"}}}},
            {"name": "angular_velocity",
             "type": {"scalar": {"named": {"namespaces": ["geometry_msgs", "msg"], "name": "Vector3"}}}},
            {"name": "angular_velocity_covariance",
             "type": {"container": {"kind": {"array": {"size": 9}}, "element": {"basic": "double"}}}},
            {"name": "linear_acceleration",
             "type": {"scalar": {"named": {"namespaces": ["geometry_msgs", "msg"], "name": "Vector3"}}}},
            {"name": "linear_acceleration_covariance",
             "type": {"container": {"kind": {"array": {"size": 9}}, "element": {"basic": "double"}}}}
          ]
        }
        "#,
    );

    let rendered = render_fields(&CsTypeMapper::new(), &imu);
    insta::assert_snapshot!(rendered, @r"
    public std_msgs.msg.Header header = new std_msgs.msg.Header();
    public UnityEngine.Quaternion orientation = new UnityEngine.Quaternion();
    public double[] orientation_covariance = new double[9];
    public UnityEngine.Vector3 angular_velocity = new UnityEngine.Vector3();
    public double[] angular_velocity_covariance = new double[9];
    public UnityEngine.Vector3 linear_acceleration = new UnityEngine.Vector3();
    public double[] linear_acceleration_covariance = new double[9];
    ");
}

#[test]
fn test_default_initializers() {
    let message = message_from_json(
        r#"
        {
          "type": {"namespaces": ["test_msgs", "msg"], "name": "Defaults"},
          "members": [
            {"name": "label", "type": {"scalar": {"string": {"max_size": null}}}, "default": "unset"},
            {"name": "enabled", "type": {"scalar": {"basic": "boolean"}}, "default": true},
            {"name": "mode", "type": {"scalar": {"basic": "int8"}}, "default": -1},
            {"name": "sample_rate", "type": {"scalar": {"basic": "float"}}, "default": 2.5},
            {"name": "watchdog_us", "type": {"scalar": {"basic": "int64"}}, "default": 5000},
            {"name": "mask", "type": {"scalar": {"basic": "uint64"}}, "default": 18446744073709551615},
            {"name": "offset", "type": {"scalar": {"basic": "int32"}}, "default": -2147483648},
            {"name": "gains",
             "type": {"container": {"kind": {"bounded_sequence": {"max_size": 3}}, "element": {"basic": "float"}}},
             "default": [1.5, 0.5]},
            {"name": "labels",
             "type": {"container": {"kind": {"array": {"size": 2}}, "element": {"string": {"max_size": null}}}},
             "default": ["a", "b"]},
            {"name": "history",
             "type": {"container": {"kind": "unbounded_sequence", "element": {"basic": "int16"}}}}
          ]
        }
        "#,
    );

    let rendered = render_fields(&CsTypeMapper::new(), &message);
    insta::assert_snapshot!(rendered, @r#"
    public string label = "unset";
    public bool enabled = true;
    public sbyte mode = -1;
    public float sample_rate = 2.5f;
    public System.Int64 watchdog_us = 5000L;
    public System.UInt64 mask = 18446744073709551615UL;
    public System.Int32 offset = (-2147483647 - 1);
    public System.Collections.Generic.List<float> gains = {{1.5f, 0.5f}};
    public string[] labels = {{"a"}, {"b"}};
    public System.Collections.Generic.List<System.Int16> history = new System.Collections.Generic.List<System.Int16>();
    "#);
}

#[test]
fn test_unity_substitution_is_configurable() {
    let pose = message_from_json(
        r#"
        {
          "type": {"namespaces": ["geometry_msgs", "msg"], "name": "Pose"},
          "members": [
            {"name": "position",
             "type": {"scalar": {"named": {"namespaces": ["geometry_msgs", "msg"], "name": "Point"}}}},
            {"name": "orientation",
             "type": {"scalar": {"named": {"namespaces": ["geometry_msgs", "msg"], "name": "Quaternion"}}}}
          ]
        }
        "#,
    );

    let with_unity = render_fields(&CsTypeMapper::with_unity_types(true), &pose);
    assert!(
        with_unity.contains("public UnityEngine.Vector3 position = new UnityEngine.Vector3();")
    );
    assert!(with_unity.contains("public UnityEngine.Quaternion orientation"));

    let without_unity = render_fields(&CsTypeMapper::with_unity_types(false), &pose);
    assert!(without_unity.contains("public geometry_msgs.msg.Point position"));
    assert!(without_unity.contains("new geometry_msgs.msg.Quaternion()"));
    assert!(!without_unity.contains("UnityEngine"));
}

#[test]
fn test_numeric_literals_round_trip() {
    // Rendered literals parse back to the value they came from once the
    // width suffix is stripped.
    let int_cases = [
        (BasicType::Int8, -7),
        (BasicType::Int16, 300),
        (BasicType::Int32, -70000),
        (BasicType::Int64, 1234567890123),
    ];
    for (basic, value) in int_cases {
        let rendered = render_scalar(&ScalarType::Basic(basic), &ScalarValue::Int(value)).unwrap();
        let digits = rendered.trim_end_matches('L');
        assert_eq!(digits.parse::<i64>().unwrap(), value, "{}", basic);
    }

    let uint_cases = [
        (BasicType::Uint8, 200),
        (BasicType::Uint16, 60000),
        (BasicType::Uint32, 4000000000),
        (BasicType::Uint64, 18446744073709551615),
    ];
    for (basic, value) in uint_cases {
        let rendered = render_scalar(&ScalarType::Basic(basic), &ScalarValue::Uint(value)).unwrap();
        let digits = rendered.trim_end_matches("UL");
        assert_eq!(digits.parse::<u64>().unwrap(), value, "{}", basic);
    }

    let float =
        render_scalar(&ScalarType::Basic(BasicType::Float), &ScalarValue::Float(2.5)).unwrap();
    assert_eq!(float.trim_end_matches('f').parse::<f64>().unwrap(), 2.5);

    let double =
        render_scalar(&ScalarType::Basic(BasicType::Double), &ScalarValue::Float(6.25)).unwrap();
    assert_eq!(double.parse::<f64>().unwrap(), 6.25);

    let flag =
        render_scalar(&ScalarType::Basic(BasicType::Boolean), &ScalarValue::Bool(true)).unwrap();
    assert_eq!(flag, "true");
}
