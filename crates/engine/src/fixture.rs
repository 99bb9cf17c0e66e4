//! 예제 로그 -- 데모와 테스트에 쓰는 고정 Spring Boot 로그
//!
//! 동일한 `NullPointerException` 3건과 `TimeoutException` 2건이
//! INFO/WARN/DEBUG 줄 사이에 섞여 있습니다. 실행 시 로직은 없습니다.

/// 여러 에러가 섞인 실제와 비슷한 Java/Spring Boot 로그
pub const EXAMPLE_LOGS: &str = r#"2025-10-25 12:00:01.234 INFO  [payment-processor] Starting PaymentProcessorApplication v2.4.1 on host pay-01
2025-10-25 12:00:03.871 INFO  [payment-processor] Tomcat started on port(s): 8080 (http)
2025-10-25 12:00:04.002 DEBUG [payment-processor] Loaded 12 merchant configurations
2025-10-25 12:00:10.114 INFO  [payment-processor] Processing order ORD-1001 amount=49.99 currency=USD
2025-10-25 12:00:15.502 ERROR [payment-processor] java.lang.NullPointerException: Cannot invoke "Customer.getId()" because "customer" is null
    at com.example.payment.PaymentService.process(PaymentService.java:142)
    at org.springframework.aop.framework.ReflectiveMethodInvocation.proceed(ReflectiveMethodInvocation.java:186)
    at org.apache.catalina.core.ApplicationFilterChain.doFilter(ApplicationFilterChain.java:166)
2025-10-25 12:00:20.330 WARN  [payment-processor] Retrying order ORD-1001 (attempt 2 of 3)
2025-10-25 12:00:26.118 ERROR [payment-processor] java.lang.NullPointerException: Cannot invoke "Customer.getId()" because "customer" is null
    at com.example.payment.PaymentService.process(PaymentService.java:142)
    at org.springframework.aop.framework.ReflectiveMethodInvocation.proceed(ReflectiveMethodInvocation.java:186)
    at org.apache.catalina.core.ApplicationFilterChain.doFilter(ApplicationFilterChain.java:166)
2025-10-25 12:00:31.907 WARN  [payment-processor] Retrying order ORD-1001 (attempt 3 of 3)
2025-10-25 12:00:37.644 ERROR [payment-processor] java.lang.NullPointerException: Cannot invoke "Customer.getId()" because "customer" is null
    at com.example.payment.PaymentService.process(PaymentService.java:142)
    at org.springframework.aop.framework.ReflectiveMethodInvocation.proceed(ReflectiveMethodInvocation.java:186)
    at org.apache.catalina.core.ApplicationFilterChain.doFilter(ApplicationFilterChain.java:166)
2025-10-25 12:00:45.250 INFO  [payment-processor] Processing order ORD-1002 amount=120.00 currency=EUR
2025-10-25 12:01:02.118 ERROR [payment-processor] Payment gateway call failed: java.util.concurrent.TimeoutException: Gateway did not respond within 5000ms
    at java.base/java.util.concurrent.CompletableFuture.timedGet(CompletableFuture.java:1960)
    at com.example.gateway.GatewayClient.charge(GatewayClient.java:88)
2025-10-25 12:01:07.400 WARN  [payment-processor] Gateway latency above threshold: p99=5120ms
2025-10-25 12:01:12.730 ERROR [payment-processor] Payment gateway call failed: java.util.concurrent.TimeoutException: Gateway did not respond within 5000ms
    at java.base/java.util.concurrent.CompletableFuture.timedGet(CompletableFuture.java:1960)
    at com.example.gateway.GatewayClient.charge(GatewayClient.java:88)
2025-10-25 12:01:20.005 INFO  [payment-processor] Order ORD-1002 moved to manual review queue
2025-10-25 12:01:30.000 DEBUG [payment-processor] Health check passed: db=UP gateway=DEGRADED
"#;
